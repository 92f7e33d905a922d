use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::animation::AnimationState;
use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{LayoutResult, Rect};
use crate::render::draw;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Owns the terminal for the lifetime of the UI.
///
/// Raw mode, the alternate screen and mouse capture are switched on in
/// [`Terminal::new`] and restored on drop. Each [`Terminal::render`] only
/// writes the cells that changed since the previous frame.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::info!("[terminal] entered raw mode at {width}x{height}");

        Ok(Self {
            stdout,
            // Forces a full paint on the first frame.
            previous: Buffer::new(0, 0),
        })
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait for input.
    ///
    /// With `None` this blocks until at least one event arrives; with a
    /// timeout it may return an empty batch. Events already queued behind
    /// the first are drained into the same batch.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if let Some(dur) = timeout {
            if !event::poll(dur)? {
                return Ok(events);
            }
        }

        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    /// Lay out and paint `root`, advancing `animation` to now.
    /// Returns the frame's layout, which input should be hit-tested against.
    pub fn render(&mut self, root: &Element, animation: &mut AnimationState) -> io::Result<LayoutResult> {
        let t0 = Instant::now();
        let (width, height) = terminal::size()?;
        if width != self.previous.width() || height != self.previous.height() {
            log::debug!("[terminal] resized to {width}x{height}");
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            self.previous = Buffer::new(0, 0);
        }

        let (layout, buffer) = draw(root, Rect::from_size(width, height), animation, t0);
        let written = self.flush_diff(&buffer)?;

        self.previous = buffer;

        log::trace!(
            "[terminal] frame: {written} cells in {:.2}ms",
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Ok(layout)
    }

    fn flush_diff(&mut self, current: &Buffer) -> io::Result<usize> {
        let full = current.width() != self.previous.width() || current.height() != self.previous.height();
        let changes: Vec<(u16, u16, &Cell)> = if full {
            current.cells().collect()
        } else {
            current.diff(&self.previous).collect()
        };

        let mut written = 0;
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in changes {
            if cell.wide_continuation {
                continue;
            }

            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;
            written += 1;
            cursor_at = Some((x + char_width(cell.char).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(written)
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::info!("[terminal] restored");
    }
}
