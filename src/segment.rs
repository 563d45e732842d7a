//! Splitting a line into word tokens on either side of the cursor.

use crate::types::{Direction, Token};

/// Letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word tokens of a line, split at the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Tokens reachable by a backward jump, left to right.
    pub before: Vec<Token>,
    /// Tokens reachable by a forward jump, left to right.
    pub after: Vec<Token>,
    /// The cursor sits inside a word: the word left a non-empty fragment on
    /// both sides. The fragment nearest the cursor on each side is then the
    /// cursor's own word and never a jump target.
    pub cursor_in_word: bool,
}

impl Segmentation {
    fn push(&mut self, word: &[char], start: usize, direction: Direction) {
        tracing::debug!(
            ?direction,
            word = %word.iter().collect::<String>(),
            start,
            "classified token"
        );
        let token = Token {
            word: word.to_vec(),
            start,
            direction,
        };
        match direction {
            Direction::Forward => self.after.push(token),
            Direction::Backward => self.before.push(token),
        }
    }
}

/// Maximal word runs with their char offsets.
fn words(line: &[char]) -> impl Iterator<Item = (usize, &[char])> {
    line.chunk_by(|a, b| is_word_char(*a) == is_word_char(*b))
        .scan(0, |offset, run| {
            let start = *offset;
            *offset += run.len();
            Some((start, run))
        })
        .filter(|(_, run)| run.first().copied().is_some_and(is_word_char))
}

/// Classify every word of `line` as lying before or after `cursor`.
///
/// A word touching the cursor is split in two: the part before the cursor
/// keeps the word's start, and the part after it skips the character under
/// the cursor and starts at `cursor + 1`. Empty fragments are dropped.
pub fn segment(line: &[char], cursor: usize) -> Segmentation {
    let mut seg = Segmentation::default();

    for (start, word) in words(line) {
        let end = start + word.len();

        if start <= cursor && cursor <= end {
            let split = cursor - start;
            let before = &word[..split];
            let after = word.get(split + 1..).unwrap_or_default();

            seg.cursor_in_word |= !before.is_empty() && !after.is_empty();
            if !before.is_empty() {
                seg.push(before, start, Direction::Backward);
            }
            if !after.is_empty() {
                seg.push(after, cursor + 1, Direction::Forward);
            }
        } else if start > cursor {
            seg.push(word, start, Direction::Forward);
        } else {
            seg.push(word, start, Direction::Backward);
        }
    }

    seg
}
