use thiserror::Error;

/// Errors returned by the highlight queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// The cursor offset lies past the end of the line.
    #[error("cursor offset {cursor} is outside a line of {len} chars")]
    CursorOutOfRange { cursor: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, HighlightError>;
