//! Rendering configuration for jump highlights.
//!
//! The style is an explicit value handed to the [`Engine`](crate::Engine);
//! nothing here is global.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ColoringEntry, LineLabel, Position, Range, Tier};

/// Font weight of a highlighted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

/// How one tier of highlights is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct TierStyle {
    /// Foreground color, as understood by the host (`#rrggbb` or a color name).
    pub color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_weight: FontWeight,
    #[cfg_attr(feature = "serde", serde(default = "underline_default"))]
    pub underline: bool,
}

#[cfg(feature = "serde")]
fn underline_default() -> bool {
    true
}

impl TierStyle {
    fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
            font_weight: FontWeight::Bold,
            underline: true,
        }
    }
}

/// Highlight configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct HighlightStyle {
    /// Targets reachable with one jump.
    pub primary: TierStyle,
    /// Targets needing repeated jumps.
    pub secondary: TierStyle,
    /// Relative line labels above the cursor.
    pub line_above_color: String,
    /// Relative line labels below the cursor.
    pub line_below_color: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            primary: TierStyle::new("#ff5f5f"),
            secondary: TierStyle::new("#5fafff"),
            line_above_color: "#87d787".to_string(),
            line_below_color: "#d7af5f".to_string(),
        }
    }
}

impl HighlightStyle {
    pub fn for_tier(&self, tier: Tier) -> &TierStyle {
        match tier {
            Tier::Primary => &self.primary,
            Tier::Secondary => &self.secondary,
        }
    }

    /// Decorate each entry on `line`, converting char offsets with `to_col`.
    pub fn decorate<F>(&self, line: u32, entries: &[ColoringEntry], to_col: F) -> Vec<Decoration>
    where
        F: Fn(usize) -> u32,
    {
        entries
            .iter()
            .map(|entry| {
                let col = to_col(entry.position);
                let tier = entry.tier();
                Decoration {
                    range: Range {
                        start: Position { line, col },
                        end: Position { line, col: col + 1 },
                    },
                    tier,
                    style: self.for_tier(tier).clone(),
                }
            })
            .collect()
    }

    /// Label every line other than `cursor_line` with its distance from it,
    /// nearest first: lines above, then lines below.
    pub fn line_labels(&self, cursor_line: u32, line_count: u32) -> Vec<LineLabel> {
        let above = (0..cursor_line).rev().map(|line| LineLabel {
            line,
            distance: cursor_line - line,
            above: true,
            color: self.line_above_color.clone(),
        });
        let below = (cursor_line + 1..line_count).map(|line| LineLabel {
            line,
            distance: line - cursor_line,
            above: false,
            color: self.line_below_color.clone(),
        });
        above.chain(below).collect()
    }
}

/// One highlighted character, ready for the host to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// A single-column range on the cursor line.
    pub range: Range,
    pub tier: Tier,
    pub style: TierStyle,
}
