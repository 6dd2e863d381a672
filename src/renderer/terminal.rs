//! Terminal front end
//!
//! Raw mode and the alternate screen via ratatui, keys via crossterm. The
//! field is scaled onto the terminal with a block-marker canvas.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use ratatui::DefaultTerminal;
use ratatui::Frame as TermFrame;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Context, Line as Segment};

use super::{
    BACKGROUND_COLOR, BALL_COLOR, EventSource, Frame, PADDLE_COLOR, Presenter, TEXT_COLOR,
};
use crate::consts::{PAUSED_MESSAGE, WELCOME_MESSAGE};
use crate::error::{Error, Result};
use crate::platform::{InputEvent, Key};
use crate::sim::Bounds;

/// Smallest terminal that can hold the status line
const MIN_ROWS: u16 = 3;

fn min_columns() -> u16 {
    (WELCOME_MESSAGE.len().max(PAUSED_MESSAGE.len()) + 2) as u16
}

/// Raw-mode terminal implementing both halves of the boundary.
/// The terminal is restored on drop.
pub struct TerminalFrontend {
    terminal: DefaultTerminal,
    keys: KeyTranslator,
}

impl TerminalFrontend {
    pub fn new() -> Result<Self> {
        let terminal = open_terminal(ratatui::try_init, ratatui::restore)?;
        let mut frontend = Self {
            terminal,
            keys: KeyTranslator::default(),
        };

        frontend.check_text_area()?;
        frontend.keys = KeyTranslator::new(enable_key_release());
        if !frontend.keys.key_release {
            log::warn!("Terminal does not report key releases; keys act as short taps");
        }

        log::info!("Terminal front end ready");
        Ok(frontend)
    }

    /// The status line needs a few columns and rows to be readable
    fn check_text_area(&self) -> Result<()> {
        let size = self
            .terminal
            .size()
            .map_err(|e| Error::TextInit(format!("cannot query terminal size: {e}")))?;

        if size.width < min_columns() || size.height < MIN_ROWS {
            return Err(Error::TextInit(format!(
                "terminal is {}x{}, need at least {}x{}",
                size.width,
                size.height,
                min_columns(),
                MIN_ROWS
            )));
        }
        Ok(())
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        if self.keys.key_release {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    }
}

impl EventSource for TerminalFrontend {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) -> io::Result<()> {
        self.keys.drain_pending(events);

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.keys.push(key, events);
            }
        }
        Ok(())
    }
}

/// Run terminal setup. A half-initialized terminal (raw mode on, alternate
/// screen failed) is restored before the error is returned.
fn open_terminal<T>(init: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> Result<T> {
    init().map_err(|e| {
        restore();
        Error::DisplayInit(e)
    })
}

/// Turns crossterm key events into input events
#[derive(Debug, Default)]
struct KeyTranslator {
    /// Terminal reports key releases (keyboard enhancement protocol)
    key_release: bool,
    /// Releases to synthesize on the next poll when `key_release` is off
    pending_release: Vec<Key>,
}

impl KeyTranslator {
    fn new(key_release: bool) -> Self {
        Self {
            key_release,
            pending_release: Vec::new(),
        }
    }

    /// Emit the releases owed from the previous poll
    fn drain_pending(&mut self, events: &mut Vec<InputEvent>) {
        events.extend(self.pending_release.drain(..).map(InputEvent::KeyUp));
    }

    fn push(&mut self, event: KeyEvent, events: &mut Vec<InputEvent>) {
        // Raw mode swallows SIGINT
        if event.kind == KeyEventKind::Press
            && event.modifiers.contains(KeyModifiers::CONTROL)
            && event.code == KeyCode::Char('c')
        {
            events.push(InputEvent::Quit);
            return;
        }

        let Some(key) = map_key(event.code) else {
            return;
        };

        match event.kind {
            KeyEventKind::Press => {
                events.push(InputEvent::KeyDown(key));
                if !self.key_release {
                    self.pending_release.push(key);
                }
            }
            // Held keys are already down; confirm must not retrigger
            KeyEventKind::Repeat => {}
            KeyEventKind::Release => events.push(InputEvent::KeyUp(key)),
        }
    }
}

impl Presenter for TerminalFrontend {
    fn present(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.terminal.draw(|term| draw_frame(term, frame))?;
        Ok(())
    }
}

fn enable_key_release() -> bool {
    match terminal::supports_keyboard_enhancement() {
        Ok(true) => execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok(),
        Ok(false) => false,
        Err(e) => {
            log::warn!("Keyboard enhancement query failed: {}", e);
            false
        }
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

#[inline]
fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

fn draw_frame(term: &mut TermFrame, frame: &Frame<'_>) {
    let area = term.area();
    let field_w = f64::from(frame.field.x);
    let field_h = f64::from(frame.field.y);
    // One canvas cell in field units
    let cell_w = field_w / f64::from(area.width.max(1));
    let cell_h = field_h / f64::from(area.height.max(1));

    let canvas = Canvas::default()
        .background_color(rgb(BACKGROUND_COLOR))
        .marker(Marker::Block)
        .x_bounds([0.0, field_w])
        .y_bounds([0.0, field_h])
        .paint(|ctx| {
            for paddle in &frame.paddles {
                fill(ctx, paddle, field_h, cell_h, rgb(PADDLE_COLOR));
            }
            fill(ctx, &frame.ball, field_h, cell_h, rgb(BALL_COLOR));

            if !frame.message.is_empty() {
                let text_w = frame.message.chars().count() as f64 * cell_w;
                ctx.print(
                    field_w / 2.0 - text_w / 2.0,
                    field_h / 2.0,
                    Line::styled(frame.message.to_owned(), Style::new().fg(rgb(TEXT_COLOR))),
                );
            }
        });

    term.render_widget(canvas, area);
}

/// Fill a field rectangle with horizontal segments one cell apart.
/// Canvas y grows upward, field y grows downward.
fn fill(ctx: &mut Context<'_>, bounds: &Bounds, field_h: f64, cell_h: f64, color: Color) {
    if bounds.size.x <= 0.0 || bounds.size.y <= 0.0 {
        return;
    }

    let x1 = f64::from(bounds.left());
    let x2 = f64::from(bounds.right());
    let top = field_h - f64::from(bounds.top());
    let bottom = field_h - f64::from(bounds.bottom());

    let mut y = bottom;
    while y < top {
        ctx.draw(&Segment {
            x1,
            y1: y,
            x2,
            y2: y,
            color,
        });
        y += cell_h;
    }
    ctx.draw(&Segment {
        x1,
        y1: top,
        x2,
        y2: top,
        color,
    });
}
