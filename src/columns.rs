//! Conversions between grapheme columns and char offsets within one line.
//!
//! Hosts address the cursor in grapheme clusters while the analyzers work on
//! chars. A combining sequence therefore maps to a single column.

use unicode_segmentation::UnicodeSegmentation;

/// Char offset of the grapheme at `col`. Columns past the end map to the
/// line's char length.
pub fn col_to_offset(line: &str, col: u32) -> usize {
    line.graphemes(true)
        .take(col as usize)
        .map(|g| g.chars().count())
        .sum()
}

/// Char offset of the last char of the grapheme at `col`. Columns past the
/// end map to the line's char length.
pub fn col_to_last_offset(line: &str, col: u32) -> usize {
    let start = col_to_offset(line, col);
    match line.graphemes(true).nth(col as usize) {
        Some(grapheme) => start + grapheme.chars().count() - 1,
        None => start,
    }
}

/// Column of the grapheme containing the char at `offset`. Offsets past the
/// end map to the line's grapheme length.
pub fn offset_to_col(line: &str, offset: usize) -> u32 {
    let mut chars = 0;
    for (col, grapheme) in line.graphemes(true).enumerate() {
        chars += grapheme.chars().count();
        if offset < chars {
            return col as u32;
        }
    }
    line.graphemes(true).count() as u32
}
