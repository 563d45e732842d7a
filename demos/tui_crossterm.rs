//! Terminal UI demo using crossterm and ratatui.
//!
//! Shows jump_hints highlights while a find or sneak motion is pending.
//! Run with: cargo run --example tui_crossterm
//!
//! Keys: h/j/k/l move, f/F/s/S start a motion (then type the target),
//! V toggles relative line labels, Esc cancels, q quits.

use std::collections::HashMap;
use std::io;
use std::str::FromStr;

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use jump_hints::{
    Command, Decoration, Engine, FontWeight, LineLabel, LineSource, MotionEvent, MotionKind,
    Position, TierStyle, columns,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// Text buffer implementation using ropey
struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    fn new() -> Self {
        Self {
            rope: Rope::from(
                "the cat sat on the mat\nlet banana = bandana.split(band);\nfn main() { let x = foo(bar, baz); }\n\nPress f/F/s/S, then type the target.",
            ),
        }
    }
}

impl LineSource for RopeBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line_len(&self, line: u32) -> u32 {
        self.line_text(line).graphemes(true).count() as u32
    }

    fn line_text(&self, line: u32) -> String {
        if line >= self.line_count() {
            return String::new();
        }
        let mut s = self.rope.line(line as usize).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        s
    }
}

/// A motion waiting for its target characters.
struct Pending {
    kind: MotionKind,
    typed: String,
}

struct App {
    engine: Engine,
    buffer: RopeBuffer,
    cursor: Position,
    pending: Option<Pending>,
    decorations: Vec<Decoration>,
    labels: Vec<LineLabel>,
    message: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            buffer: RopeBuffer::new(),
            cursor: Position::ZERO,
            pending: None,
            decorations: vec![],
            labels: vec![],
            message: "-- NORMAL --".to_string(),
            should_quit: false,
        }
    }

    fn send(&mut self, event: MotionEvent) {
        for cmd in self.engine.handle_event(&self.buffer, self.cursor, event) {
            match cmd {
                Command::Highlight(decorations) => self.decorations = decorations,
                Command::ClearHighlights => self.decorations.clear(),
                Command::ShowLineLabels(labels) => self.labels = labels,
                Command::ClearLineLabels => self.labels.clear(),
            }
        }
    }

    fn move_to(&mut self, pos: Position) {
        self.cursor = self.buffer.clamp(pos);
        self.send(MotionEvent::CursorMoved(self.cursor));
    }

    fn handle_key(&mut self, code: CKeyCode) {
        if let Some(pending) = &mut self.pending {
            match code {
                CKeyCode::Esc => {
                    self.pending = None;
                    self.send(MotionEvent::End);
                }
                CKeyCode::Char(c) => {
                    pending.typed.push(c);
                    let needed = match pending.kind {
                        MotionKind::FindForward | MotionKind::FindBackward => 1,
                        MotionKind::SneakForward | MotionKind::SneakBackward => 2,
                    };
                    if pending.typed.chars().count() == needed {
                        let kind = pending.kind;
                        let needle = std::mem::take(&mut pending.typed);
                        self.pending = None;
                        self.send(MotionEvent::End);
                        if let Some(target) = self.jump(kind, &needle) {
                            self.move_to(target);
                        }
                    }
                }
                _ => {}
            }
        } else {
            self.handle_normal_key(code);
        }

        self.message = match &self.pending {
            Some(p) => format!("-- {:?} --", p.kind),
            None => "-- NORMAL --".to_string(),
        };
    }

    fn handle_normal_key(&mut self, code: CKeyCode) {
        match code {
            CKeyCode::Char('q') => self.should_quit = true,
            CKeyCode::Char('h') => self.move_to(Position {
                line: self.cursor.line,
                col: self.cursor.col.saturating_sub(1),
            }),
            CKeyCode::Char('l') => self.move_to(Position {
                line: self.cursor.line,
                col: self.cursor.col + 1,
            }),
            CKeyCode::Char('k') => self.move_to(Position {
                line: self.cursor.line.saturating_sub(1),
                col: self.cursor.col,
            }),
            CKeyCode::Char('j') => self.move_to(Position {
                line: self.cursor.line + 1,
                col: self.cursor.col,
            }),
            CKeyCode::Char('V') => {
                if self.labels.is_empty() {
                    self.send(MotionEvent::VisualLineStart);
                } else {
                    self.send(MotionEvent::VisualLineEnd);
                }
            }
            CKeyCode::Char(c) => {
                let kind = match c {
                    'f' => MotionKind::FindForward,
                    'F' => MotionKind::FindBackward,
                    's' => MotionKind::SneakForward,
                    'S' => MotionKind::SneakBackward,
                    _ => return,
                };
                self.pending = Some(Pending {
                    kind,
                    typed: String::new(),
                });
                self.send(MotionEvent::Start(kind));
            }
            _ => {}
        }
    }

    /// Nearest occurrence of `needle` on the cursor line in the motion's direction.
    fn jump(&self, kind: MotionKind, needle: &str) -> Option<Position> {
        let line = self.buffer.line_text(self.cursor.line);
        let chars: Vec<char> = line.chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        let cursor = columns::col_to_offset(&line, self.cursor.col);
        let matches_at = |i: usize| chars.get(i..i + needle.len()) == Some(&needle[..]);

        let offset = match kind.direction() {
            jump_hints::Direction::Forward => (cursor + 1..chars.len()).find(|&i| matches_at(i)),
            jump_hints::Direction::Backward => (0..cursor).rev().find(|&i| matches_at(i)),
        }?;
        Some(Position {
            line: self.cursor.line,
            col: columns::offset_to_col(&line, offset),
        })
    }
}

fn tier_style(style: &TierStyle) -> Style {
    let mut s = Style::default().fg(Color::from_str(&style.color).unwrap_or(Color::Red));
    if style.font_weight == FontWeight::Bold {
        s = s.add_modifier(Modifier::BOLD);
    }
    if style.underline {
        s = s.add_modifier(Modifier::UNDERLINED);
    }
    s
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let highlights: HashMap<(u32, u32), Style> = app
        .decorations
        .iter()
        .map(|d| ((d.range.start.line, d.range.start.col), tier_style(&d.style)))
        .collect();
    let labels: HashMap<u32, &LineLabel> = app.labels.iter().map(|l| (l.line, l)).collect();

    // Main text area, with a 4-column gutter for relative line labels
    let mut lines = vec![];
    for i in 0..app.buffer.line_count() {
        let gutter = match labels.get(&i) {
            Some(label) => Span::styled(
                format!("{:>3} ", label.distance),
                Style::default().fg(Color::from_str(&label.color).unwrap_or(Color::Gray)),
            ),
            None => Span::raw("    "),
        };
        let mut spans = vec![gutter];
        for (col, grapheme) in app.buffer.line_text(i).graphemes(true).enumerate() {
            let style = highlights
                .get(&(i, col as u32))
                .copied()
                .unwrap_or_default();
            spans.push(Span::styled(grapheme.to_string(), style));
        }
        lines.push(Line::from(spans));
    }

    let text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("jump_hints demo"),
    );
    f.render_widget(text, chunks[0]);

    // Status line
    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    // Set cursor position
    f.set_cursor(
        chunks[0].x + 1 + 4 + app.cursor.col as u16,
        chunks[0].y + 1 + app.cursor.line as u16,
    );
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_key(key.code);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
