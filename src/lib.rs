pub mod columns;
pub mod engine;
pub mod error;
pub mod events;
pub mod find;
pub mod highlight;
pub mod occurrence;
pub mod segment;
pub mod sneak;
pub mod style;
pub mod traits;
pub mod types;

pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::error::HighlightError;
pub use crate::events::{Capabilities, MotionEvent, MotionKind};
pub use crate::find::CharHighlighter;
pub use crate::highlight::Highlighter;
pub use crate::sneak::BigramHighlighter;
pub use crate::style::{Decoration, FontWeight, HighlightStyle, TierStyle};
pub use crate::traits::LineSource;
pub use crate::types::{ColoringEntry, Command, Direction, LineLabel, Position, Range, Tier, Token};
