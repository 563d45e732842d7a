//! Two-character targets for sneak motions (`s`/`S`).

use crate::error::Result;
use crate::highlight::{Highlighter, collect_entries, line_chars};
use crate::occurrence::{Bigram, OccurrenceTable, bigram_occurrences};
use crate::segment::segment;
use crate::types::{ColoringEntry, Direction, Token};

/// Highlights are only drawn in two tiers: one jump, or more.
pub const MAX_TIMES_TO_REACH: u32 = 2;

/// Highlights the character pair of each word that a sneak motion reaches
/// in the fewest jumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigramHighlighter;

impl Highlighter for BigramHighlighter {
    fn highlight(
        &self,
        line: &str,
        cursor: usize,
        direction: Direction,
    ) -> Result<Vec<ColoringEntry>> {
        let line = line_chars(line, cursor)?;
        let table = bigram_occurrences(&line, cursor, direction);
        let seg = segment(&line, cursor);
        Ok(collect_entries(&seg, direction, |token| {
            disambiguate(&table, token)
        }))
    }
}

/// Targets for a forward sneak from `cursor`.
pub fn highlight_forward(line: &str, cursor: usize) -> Result<Vec<ColoringEntry>> {
    BigramHighlighter.highlight(line, cursor, Direction::Forward)
}

/// Targets for a backward sneak from `cursor`, nearest word first.
pub fn highlight_backward(line: &str, cursor: usize) -> Result<Vec<ColoringEntry>> {
    BigramHighlighter.highlight(line, cursor, Direction::Backward)
}

/// Rank each pair of `token` by how many same-pair occurrences lie closer
/// to the cursor, and keep the best. Ties go to the pair met first while
/// walking away from the cursor's side of the word: left to right going
/// forward, right to left going backward.
fn disambiguate(table: &OccurrenceTable<Bigram>, token: &Token) -> Option<ColoringEntry> {
    let ranked = token
        .word
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let position = token.start + index;
            let offsets = table.get(&[pair[0], pair[1]])?;
            let at = offsets.binary_search(&position).ok()?;
            let rank = match token.direction {
                Direction::Forward => at,
                Direction::Backward => offsets.len() - at - 1,
            };
            Some((position, rank as u32 + 1))
        });

    let best = match token.direction {
        Direction::Forward => ranked.min_by_key(|&(_, times)| times),
        Direction::Backward => ranked.rev().min_by_key(|&(_, times)| times),
    };

    best.map(|(position, times)| ColoringEntry {
        position,
        min_times_to_reach: times.min(MAX_TIMES_TO_REACH),
    })
}
