use crate::find::CharHighlighter;
use crate::highlight::Highlighter;
use crate::sneak::BigramHighlighter;
use crate::types::{Direction, Position};

/// A jump motion of the external modal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// `f`: jump to a typed character after the cursor.
    FindForward,
    /// `F`: jump to a typed character before the cursor.
    FindBackward,
    /// `s`: jump to a typed character pair after the cursor.
    SneakForward,
    /// `S`: jump to a typed character pair before the cursor.
    SneakBackward,
}

impl MotionKind {
    pub fn direction(self) -> Direction {
        match self {
            MotionKind::FindForward | MotionKind::SneakForward => Direction::Forward,
            MotionKind::FindBackward | MotionKind::SneakBackward => Direction::Backward,
        }
    }

    /// The analyzer matching the motion's unit.
    pub fn highlighter(self) -> &'static dyn Highlighter {
        match self {
            MotionKind::FindForward | MotionKind::FindBackward => &CharHighlighter,
            MotionKind::SneakForward | MotionKind::SneakBackward => &BigramHighlighter,
        }
    }

    /// The capability a host must declare to receive this motion.
    pub fn capability(self) -> Capabilities {
        match self {
            MotionKind::FindForward => Capabilities::FIND_FORWARD,
            MotionKind::FindBackward => Capabilities::FIND_BACKWARD,
            MotionKind::SneakForward => Capabilities::SNEAK_FORWARD,
            MotionKind::SneakBackward => Capabilities::SNEAK_BACKWARD,
        }
    }
}

bitflags::bitflags! {
    /// Notifications the host's modal engine is able to deliver.
    ///
    /// Events for undeclared capabilities are ignored by the engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        const FIND_FORWARD   = 0b00001;
        const FIND_BACKWARD  = 0b00010;
        const SNEAK_FORWARD  = 0b00100;
        const SNEAK_BACKWARD = 0b01000;
        const VISUAL_LINE    = 0b10000;
    }
}

/// Notifications delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// A jump motion started; highlight its targets.
    Start(MotionKind),
    /// The jump motion finished or was cancelled.
    End,
    /// The cursor moved, possibly to another line.
    CursorMoved(Position),
    /// Line-wise visual selection started; label lines by distance.
    VisualLineStart,
    /// Line-wise visual selection ended.
    VisualLineEnd,
}
