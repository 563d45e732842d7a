//! Where each unit (char or adjacent char pair) occurs on one side of the cursor.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::Direction;

/// An ordered pair of adjacent characters.
pub type Bigram = [char; 2];

/// Offsets at which each unit starts, in increasing order.
#[derive(Debug, Clone)]
pub struct OccurrenceTable<K> {
    positions: HashMap<K, Vec<usize>>,
}

impl<K: Eq + Hash> Default for OccurrenceTable<K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> OccurrenceTable<K> {
    fn insert(&mut self, unit: K, offset: usize) {
        self.positions.entry(unit).or_default().push(offset);
    }

    /// Offsets of `unit`, or `None` if it never occurs in the scanned region.
    pub fn get(&self, unit: &K) -> Option<&[usize]> {
        self.positions.get(unit).map(Vec::as_slice)
    }
}

#[cfg(test)]
impl<K: Eq + Hash> OccurrenceTable<K> {
    /// Number of distinct units.
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Characters strictly after (forward) or strictly before (backward) the cursor.
pub fn char_occurrences(line: &[char], cursor: usize, direction: Direction) -> OccurrenceTable<char> {
    let mut table = OccurrenceTable::default();
    for (offset, &c) in line.iter().enumerate() {
        let on_side = match direction {
            Direction::Forward => offset > cursor,
            Direction::Backward => offset < cursor,
        };
        if on_side {
            table.insert(c, offset);
        }
    }
    table
}

/// Adjacent pairs keyed by the offset of their first character.
///
/// Forward scans pairs starting at `cursor` through the end of the line.
/// Backward scans pairs that end before the cursor, i.e. starting at
/// `0..=cursor - 2`.
pub fn bigram_occurrences(
    line: &[char],
    cursor: usize,
    direction: Direction,
) -> OccurrenceTable<Bigram> {
    let mut table = OccurrenceTable::default();
    for (offset, pair) in line.windows(2).enumerate() {
        let on_side = match direction {
            Direction::Forward => offset >= cursor,
            Direction::Backward => offset + 1 < cursor,
        };
        if on_side {
            table.insert([pair[0], pair[1]], offset);
        }
    }
    table
}
