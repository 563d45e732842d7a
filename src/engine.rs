use crate::columns::{col_to_last_offset, col_to_offset, offset_to_col};
use crate::events::{Capabilities, MotionEvent, MotionKind};
use crate::style::HighlightStyle;
use crate::traits::LineSource;
use crate::types::{Command, Direction, Position};

#[derive(Debug, Clone, Copy)]
struct ActiveMotion {
    kind: MotionKind,
    line: u32,
}

/// Turns the host's motion notifications into highlight commands.
///
/// Highlights are recomputed from scratch on every motion start; the engine
/// only remembers what it is currently showing so it knows when to clear it.
#[derive(Debug, Clone)]
pub struct Engine {
    capabilities: Capabilities,
    style: HighlightStyle,
    active: Option<ActiveMotion>,
    labels_shown: bool,
}

#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub active: Option<MotionKind>,
    pub highlighted_line: Option<u32>,
    pub labels_shown: bool,
}

pub struct EngineBuilder {
    capabilities: Capabilities,
    style: HighlightStyle,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::all(),
            style: HighlightStyle::default(),
        }
    }
}

impl EngineBuilder {
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            capabilities: self.capabilities,
            style: self.style,
            active: None,
            labels_shown: false,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            active: self.active.map(|a| a.kind),
            highlighted_line: self.active.map(|a| a.line),
            labels_shown: self.labels_shown,
        }
    }

    pub fn handle_event<T: LineSource>(
        &mut self,
        text: &T,
        cursor: Position,
        event: MotionEvent,
    ) -> Vec<Command> {
        tracing::trace!(?event, ?cursor, "motion event");

        match event {
            MotionEvent::Start(kind) => {
                if !self.capabilities.contains(kind.capability()) {
                    tracing::debug!(?kind, "motion not declared by host, ignoring");
                    return vec![];
                }
                self.start(text, cursor, kind)
            }
            MotionEvent::End => self.clear_highlights(),
            MotionEvent::CursorMoved(pos) => match self.active {
                Some(active) if active.line != pos.line => self.clear_highlights(),
                _ => vec![],
            },
            MotionEvent::VisualLineStart => {
                if !self.capabilities.contains(Capabilities::VISUAL_LINE) {
                    tracing::debug!("visual line not declared by host, ignoring");
                    return vec![];
                }
                let cursor = text.clamp(cursor);
                self.labels_shown = true;
                let labels = self.style.line_labels(cursor.line, text.line_count());
                vec![Command::ShowLineLabels(labels)]
            }
            MotionEvent::VisualLineEnd => {
                if self.labels_shown {
                    self.labels_shown = false;
                    vec![Command::ClearLineLabels]
                } else {
                    vec![]
                }
            }
        }
    }

    fn start<T: LineSource>(&mut self, text: &T, cursor: Position, kind: MotionKind) -> Vec<Command> {
        // Host cursors can trail past the line end; the analyzers reject that.
        let cursor = text.clamp(cursor);
        let line = text.line_text(cursor.line);
        // Anchor on the side of the cursor grapheme facing the jump, so no
        // char of that grapheme counts as a target.
        let offset = match kind.direction() {
            Direction::Forward => col_to_last_offset(&line, cursor.col),
            Direction::Backward => col_to_offset(&line, cursor.col),
        };

        match kind.highlighter().highlight(&line, offset, kind.direction()) {
            Ok(entries) => {
                let decorations = self
                    .style
                    .decorate(cursor.line, &entries, |o| offset_to_col(&line, o));
                self.active = Some(ActiveMotion {
                    kind,
                    line: cursor.line,
                });
                vec![Command::Highlight(decorations)]
            }
            Err(err) => {
                tracing::warn!(%err, ?kind, "could not compute jump targets");
                self.clear_highlights()
            }
        }
    }

    fn clear_highlights(&mut self) -> Vec<Command> {
        if self.active.take().is_some() {
            vec![Command::ClearHighlights]
        } else {
            vec![]
        }
    }
}
