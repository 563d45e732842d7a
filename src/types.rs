use crate::style::Decoration;

/// A position within a host text buffer.
///
/// Positions are zero-indexed and column values are counted in grapheme clusters,
/// not bytes or chars. The engine converts columns to char offsets before
/// analyzing a line and converts highlight offsets back afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column position in grapheme clusters.
    pub col: u32,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { line: 0, col: 0 };
}

/// A range of text defined by start and end positions.
///
/// Ranges are half-open intervals [start, end), meaning the start position
/// is included but the end position is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start position (inclusive).
    pub start: Position,
    /// The end position (exclusive).
    pub end: Position,
}

/// The direction of a jump relative to the cursor.
///
/// Each token carries the direction it is reached from; the direction decides
/// which occurrences of a unit compete with the token's own occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Jump towards the end of the line.
    Forward,
    /// Jump towards the start of the line.
    Backward,
}

impl Direction {
    /// Whether an occurrence at `candidate` lies between the cursor and the
    /// token's unit at `target`, as seen from this direction.
    ///
    /// Forward counts occurrences strictly between the two offsets. Backward
    /// counts occurrences before the cursor down to and including `target`.
    pub fn in_range(self, candidate: usize, cursor: usize, target: usize) -> bool {
        match self {
            Direction::Forward => candidate > cursor && candidate < target,
            Direction::Backward => candidate < cursor && candidate >= target,
        }
    }
}

/// A maximal run of word characters, or a fragment of one split at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The characters of the token. Never empty.
    pub word: Vec<char>,
    /// Char offset of the first character within the line.
    pub start: usize,
    /// Side of the cursor the token is reached from.
    pub direction: Direction,
}

/// A char offset to highlight and how many jumps reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringEntry {
    /// Char offset within the line.
    pub position: usize,
    /// How many repeated occurrences of the chosen unit the user cycles
    /// through to land on this token.
    pub min_times_to_reach: u32,
}

impl ColoringEntry {
    pub fn tier(&self) -> Tier {
        if self.min_times_to_reach <= 1 {
            Tier::Primary
        } else {
            Tier::Secondary
        }
    }
}

/// Visual tier of a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Reachable with a single jump.
    Primary,
    /// Needs repeated jumps.
    Secondary,
}

/// A relative line number label shown while selecting lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLabel {
    /// The labelled line.
    pub line: u32,
    /// Distance from the cursor line, always at least 1.
    pub distance: u32,
    /// Whether the line lies above the cursor line.
    pub above: bool,
    /// Label color, taken from the style for the label's side.
    pub color: String,
}

/// Commands emitted by the engine for the host to apply.
///
/// The host owns rendering; these describe what to draw or clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace any shown jump highlights with these decorations.
    Highlight(Vec<Decoration>),
    /// Remove all jump highlights.
    ClearHighlights,

    /// Show relative line number labels.
    ShowLineLabels(Vec<LineLabel>),
    /// Remove relative line number labels.
    ClearLineLabels,
}
