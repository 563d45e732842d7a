use crate::types::Position;

/// Read access to the host's text buffer.
pub trait LineSource {
    // Basic queries
    fn line_count(&self) -> u32;
    fn line_len(&self, line: u32) -> u32; // grapheme columns

    // Text of one line without its line terminator
    fn line_text(&self, line: u32) -> String;

    fn clamp(&self, pos: Position) -> Position {
        let last_line = self.line_count().saturating_sub(1);
        let line = pos.line.min(last_line);
        let col = pos.col.min(self.line_len(line));
        Position { line, col }
    }
}
