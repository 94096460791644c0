//! Crossterm backend.

use crate::color::{self, Palette, Style};
use crate::config::WindowConfig;
use crate::error::{Error, Result};
use crate::event::{self, EventSource, KeyEvent, MouseEvent};
use crate::window::{Renderer, Window};
use crossterm::{
    cursor,
    event::{self as ct, Event},
    style::{self as cstyle, Attribute, Color},
    terminal, ExecutableCommand, QueueableCommand,
};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Enter raw mode on the alternate screen, optionally capturing the mouse;
/// returns a guard that restores the terminal when dropped.
struct RawGuard {
    mouse: bool,
}

impl RawGuard {
    fn enter(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Any early return from here on drops the guard and leaves raw mode.
        let mut guard = RawGuard { mouse: false };
        let mut out = io::stdout();
        out.execute(terminal::EnterAlternateScreen)?;
        if mouse {
            out.execute(ct::EnableMouseCapture)?;
            guard.mouse = true;
        }
        Ok(guard)
    }
}

impl Drop for RawGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = out.execute(cursor::Show);
        if self.mouse {
            let _ = out.execute(ct::DisableMouseCapture);
        }
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// A real terminal. Holding one keeps the terminal in raw mode.
pub struct CrosstermTerminal {
    out: Stdout,
    palette: Palette,
    size: (u16, u16),
    pairs_supported: usize,
    _guard: RawGuard,
}

impl CrosstermTerminal {
    pub fn open(mouse: bool) -> Result<Self> {
        let guard = RawGuard::enter(mouse)?;
        let size = terminal::size()?;
        let colors = color::colors_supported();
        debug!(?size, colors, mouse, "terminal opened");
        Ok(CrosstermTerminal {
            out: io::stdout(),
            palette: Palette::default(),
            size,
            pairs_supported: color::pairs_supported(colors),
            _guard: guard,
        })
    }

    fn queue_styled(&mut self, text: &str, style: Style) -> io::Result<()> {
        match self.palette.get(style.pair) {
            Some(pair) => {
                self.out
                    .queue(cstyle::SetForegroundColor(Color::AnsiValue(pair.fg)))?;
                self.out
                    .queue(cstyle::SetBackgroundColor(Color::AnsiValue(pair.bg)))?;
            }
            None => {
                self.out.queue(cstyle::ResetColor)?;
            }
        }
        if style.bold {
            self.out.queue(cstyle::SetAttribute(Attribute::Bold))?;
        }
        if style.underline {
            self.out.queue(cstyle::SetAttribute(Attribute::Underlined))?;
        }
        self.out.queue(cstyle::Print(text))?;
        self.out.queue(cstyle::SetAttribute(Attribute::Reset))?;
        self.out.queue(cstyle::ResetColor)?;
        Ok(())
    }
}

impl Renderer for CrosstermTerminal {
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        self.queue_styled(text, style)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.out.queue(cstyle::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        let _ = if visible {
            self.out.execute(cursor::Show)
        } else {
            self.out.execute(cursor::Hide)
        };
    }

    fn pairs_supported(&self) -> usize {
        self.pairs_supported
    }

    fn install_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

impl EventSource for CrosstermTerminal {
    fn next_event(&mut self) -> Result<KeyEvent> {
        loop {
            match ct::read()? {
                Event::Key(key) => {
                    if event::is_interrupt(&key) {
                        return Err(Error::Interrupted);
                    }
                    if let Some(event) = event::translate_key(&key) {
                        return Ok(event);
                    }
                }
                Event::Mouse(mouse) => return Ok(KeyEvent::Mouse(MouseEvent::from(mouse))),
                Event::Resize(cols, rows) => {
                    self.size = (cols, rows);
                    return Ok(KeyEvent::Resize);
                }
                _ => {}
            }
        }
    }

    fn flush_pending_input(&mut self) -> Result<()> {
        while ct::poll(Duration::ZERO)? {
            discard(ct::read()?, &mut self.size)?;
        }
        Ok(())
    }

    fn sleep(&mut self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}

/// Drop one typed-ahead event. A resize still updates `size`, and Ctrl-C
/// is kept as an interrupt rather than thrown away with the rest.
fn discard(pending: Event, size: &mut (u16, u16)) -> Result<()> {
    match pending {
        Event::Key(key) if event::is_interrupt(&key) => Err(Error::Interrupted),
        Event::Resize(cols, rows) => {
            *size = (cols, rows);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Open the terminal, build a [`Window`] from `config` and hand it to `main`.
///
/// The terminal is restored however `main` exits. A Ctrl-C that reaches
/// this boundary is swallowed and reported as `Ok(None)`.
pub fn run<T>(
    config: &WindowConfig,
    main: impl FnOnce(&mut Window<CrosstermTerminal>) -> Result<T>,
) -> Result<Option<T>> {
    let backend = CrosstermTerminal::open(config.mouse)?;
    let mut window = Window::new(backend, config)?;
    window.clear()?;
    match main(&mut window) {
        Ok(value) => Ok(Some(value)),
        Err(Error::Interrupted) => {
            info!("interrupted by user");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
