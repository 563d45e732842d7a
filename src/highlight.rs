use crate::error::{HighlightError, Result};
use crate::segment::Segmentation;
use crate::types::{ColoringEntry, Direction, Token};

/// Computes the offsets to highlight for a jump in one direction.
///
/// Implementations are pure: the same line and cursor always give the same
/// entries. `cursor` is a char offset in `0..=line.chars().count()`.
pub trait Highlighter {
    fn highlight(&self, line: &str, cursor: usize, direction: Direction)
    -> Result<Vec<ColoringEntry>>;
}

/// Decode `line` into chars, rejecting a cursor past its end.
pub(crate) fn line_chars(line: &str, cursor: usize) -> Result<Vec<char>> {
    let chars: Vec<char> = line.chars().collect();
    if cursor > chars.len() {
        return Err(HighlightError::CursorOutOfRange {
            cursor,
            len: chars.len(),
        });
    }
    Ok(chars)
}

/// Color every token on the `direction` side, nearest to the cursor first
/// when jumping backward.
///
/// When the cursor sits inside a word, the fragment of that word on the
/// queried side comes first in iteration order and is skipped: the cursor
/// already is in that word. Tokens without a disambiguating offset are dropped.
pub(crate) fn collect_entries<F>(
    seg: &Segmentation,
    direction: Direction,
    mut color: F,
) -> Vec<ColoringEntry>
where
    F: FnMut(&Token) -> Option<ColoringEntry>,
{
    let tokens: Vec<&Token> = match direction {
        Direction::Forward => seg.after.iter().collect(),
        Direction::Backward => seg.before.iter().rev().collect(),
    };
    let skip = usize::from(seg.cursor_in_word);

    tokens
        .into_iter()
        .skip(skip)
        .filter_map(|token| {
            let entry = color(token);
            tracing::trace!(start = token.start, ?entry, "colored token");
            entry
        })
        .collect()
}
