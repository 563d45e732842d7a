//! Single-character targets for find motions (`f`/`F`).

use crate::error::Result;
use crate::highlight::{Highlighter, collect_entries, line_chars};
use crate::occurrence::{OccurrenceTable, char_occurrences};
use crate::segment::segment;
use crate::types::{ColoringEntry, Direction, Token};

/// Highlights the character of each word that a find motion reaches with
/// the fewest repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharHighlighter;

impl Highlighter for CharHighlighter {
    fn highlight(
        &self,
        line: &str,
        cursor: usize,
        direction: Direction,
    ) -> Result<Vec<ColoringEntry>> {
        let line = line_chars(line, cursor)?;
        let table = char_occurrences(&line, cursor, direction);
        let seg = segment(&line, cursor);
        Ok(collect_entries(&seg, direction, |token| {
            disambiguate(&table, token, cursor)
        }))
    }
}

/// Targets for a forward find from `cursor`.
pub fn highlight_forward(line: &str, cursor: usize) -> Result<Vec<ColoringEntry>> {
    CharHighlighter.highlight(line, cursor, Direction::Forward)
}

/// Targets for a backward find from `cursor`, nearest word first.
pub fn highlight_backward(line: &str, cursor: usize) -> Result<Vec<ColoringEntry>> {
    CharHighlighter.highlight(line, cursor, Direction::Backward)
}

/// Pick the first character of `token` with at most one competing
/// occurrence between it and the cursor. Failing that, the character with
/// the fewest competitors, earliest on ties.
fn disambiguate(
    table: &OccurrenceTable<char>,
    token: &Token,
    cursor: usize,
) -> Option<ColoringEntry> {
    let mut best: Option<(usize, u32)> = None;

    for (index, c) in token.word.iter().enumerate() {
        let position = token.start + index;

        let Some(offsets) = table.get(c) else {
            return Some(ColoringEntry {
                position,
                min_times_to_reach: 1,
            });
        };

        let competitors = offsets
            .iter()
            .filter(|&&p| token.direction.in_range(p, cursor, position))
            .count() as u32;

        if competitors <= 1 {
            return Some(ColoringEntry {
                position,
                min_times_to_reach: 1,
            });
        }

        if best.is_none_or(|(_, fewest)| competitors < fewest) {
            best = Some((position, competitors));
        }
    }

    best.map(|(position, competitors)| ColoringEntry {
        position,
        min_times_to_reach: competitors,
    })
}
