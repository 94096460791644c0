//! The window session and its widgets.
//!
//! A [`Window`] owns a backend (anything that is both a [`Renderer`] and an
//! [`EventSource`]), the colour palette and the last known mouse position.
//! Widgets run their own input loop on it and return when the user confirms
//! or dismisses.

use crate::color::{Palette, Style};
use crate::config::WindowConfig;
use crate::error::Result;
use crate::event::{EventSource, KeyEvent};
use crate::layout::{centered_x, clip_to_surface, clip_to_width, display_width};
use crate::menu::{MenuGeometry, MenuOutcome, MenuPolicy, MenuState};
use crate::scroll::{ScrollOutcome, ScrollState};
use tracing::{debug, trace};

const BACK_HINT: &str = "BACK - Space/Enter";

/// Drawing side of a terminal backend.
pub trait Renderer {
    /// Draw `text` with its first cell at `(x, y)`. Callers only pass cells
    /// on the surface, clipped to the right edge.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Push everything drawn so far to the display.
    fn commit(&mut self) -> Result<()>;

    /// Real surface size as `(columns, rows)`.
    fn size(&self) -> (u16, u16);

    fn set_cursor_visible(&mut self, visible: bool);

    /// How many colour pairs the terminal holds, including the default pair.
    fn pairs_supported(&self) -> usize;

    fn install_palette(&mut self, palette: Palette);
}

/// Colours for [`Window::menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuColors {
    pub selected: u16,
    pub deselected: u16,
}

impl Default for MenuColors {
    fn default() -> Self {
        MenuColors {
            selected: 1,
            deselected: 0,
        }
    }
}

/// Placement and colours for [`Window::text_area`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPanel {
    pub title: Option<String>,
    pub x: u16,
    pub y: u16,
    /// Panel width; the window width when `None`, re-read every frame.
    pub width: Option<u16>,
    /// Panel height; the window height when `None`, re-read every frame.
    pub height: Option<u16>,
    pub main_color: u16,
    pub bar_color: u16,
}

impl Default for TextPanel {
    fn default() -> Self {
        TextPanel {
            title: None,
            x: 0,
            y: 0,
            width: None,
            height: None,
            main_color: 0,
            bar_color: 1,
        }
    }
}

impl TextPanel {
    pub fn titled(title: impl Into<String>) -> Self {
        TextPanel {
            title: Some(title.into()),
            ..TextPanel::default()
        }
    }
}

pub struct Window<B> {
    backend: B,
    width_limit: Option<u16>,
    height_limit: Option<u16>,
    background: u16,
    cursor_visible: bool,
    mouse_location: (u16, u16),
}

impl<B: Renderer + EventSource> Window<B> {
    /// Install the configured palette on `backend` and hide the cursor.
    ///
    /// Fails before anything is drawn when the palette does not fit.
    pub fn new(mut backend: B, config: &WindowConfig) -> Result<Self> {
        let palette = Palette::new(config.pairs.clone(), backend.pairs_supported())?;
        debug!(pairs = palette.len(), "installing palette");
        backend.install_palette(palette);

        let mut window = Window {
            backend,
            width_limit: config.width_limit,
            height_limit: config.height_limit,
            background: config.background,
            cursor_visible: true,
            mouse_location: (0, 0),
        };
        window.set_cursor_visible(false);
        Ok(window)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ── geometry ─────────────────────────────────────────────────────────

    /// Usable width: the terminal width, capped by the configured limit.
    pub fn width(&self) -> u16 {
        let real = self.backend.size().0;
        self.width_limit.map_or(real, |limit| real.min(limit))
    }

    pub fn height(&self) -> u16 {
        let real = self.backend.size().1;
        self.height_limit.map_or(real, |limit| real.min(limit))
    }

    /// Cell of the most recent mouse event, `(column, row)`.
    pub fn mouse_location(&self) -> (u16, u16) {
        self.mouse_location
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.backend.set_cursor_visible(visible);
    }

    // ── drawing ──────────────────────────────────────────────────────────

    /// Clear the screen and paint the background pair, if any.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.clear()?;
        if self.background != 0 {
            let (cols, rows) = self.backend.size();
            let blank = " ".repeat(usize::from(cols));
            for y in 0..rows {
                self.draw_string(0, i32::from(y), &blank, self.background, false, false);
            }
        }
        Ok(())
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.backend.commit()
    }

    /// Draw `text` at `(x, y)`. Parts that fall off the surface are dropped;
    /// nothing here ever fails the caller.
    pub fn draw_string(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        pair: u16,
        underline: bool,
        bold: bool,
    ) {
        let (cols, rows) = self.backend.size();
        let Some((x, y, text)) = clip_to_surface(x, y, text, cols, rows) else {
            return;
        };
        let style = Style {
            pair,
            bold,
            underline,
        };
        let _ = self.backend.draw_text(x, y, text, style);
    }

    /// Draw `text` centred in the window width.
    pub fn draw_string_centered(&mut self, y: i32, text: &str, pair: u16) {
        let x = centered_x(self.width(), display_width(text));
        self.draw_string(x, y, text, pair, false, false);
    }

    // ── input ────────────────────────────────────────────────────────────

    /// Wait for the next event, optionally discarding typed-ahead input
    /// first. Mouse events update [`mouse_location`](Self::mouse_location).
    pub fn read_key(&mut self, flush_first: bool) -> Result<KeyEvent> {
        if flush_first {
            self.flush_input()?;
        }
        let event = self.backend.next_event()?;
        if let KeyEvent::Mouse(mouse) = event {
            self.mouse_location = (mouse.column, mouse.row);
        }
        trace!(?event, "input");
        Ok(event)
    }

    pub fn flush_input(&mut self) -> Result<()> {
        self.backend.flush_pending_input()
    }

    pub fn sleep(&mut self, millis: u64) {
        self.backend.sleep(millis);
    }

    // ── widgets ──────────────────────────────────────────────────────────

    /// Show `lines` in a scrollable panel until the user presses Space or
    /// Enter.
    pub fn text_area<S: AsRef<str>>(&mut self, lines: &[S], panel: &TextPanel) -> Result<()> {
        let titled = panel.title.is_some();
        let mut scroll = ScrollState::new(lines.len(), self.panel_height(panel), titled);
        debug!(lines = lines.len(), max_offset = scroll.max_offset(), "text area opened");

        loop {
            let width = panel.width.unwrap_or_else(|| self.width());
            let height = self.panel_height(panel);
            scroll.resize(lines.len(), height, titled);
            self.draw_text_area(lines, panel, &scroll, width, height);
            self.refresh()?;

            let event = self.read_key(false)?;
            if scroll.advance(&event) == ScrollOutcome::Dismissed {
                debug!(offset = scroll.offset(), "text area dismissed");
                return Ok(());
            }
        }
    }

    fn panel_height(&self, panel: &TextPanel) -> u16 {
        panel.height.unwrap_or_else(|| self.height())
    }

    fn draw_text_area<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        panel: &TextPanel,
        scroll: &ScrollState,
        width: u16,
        height: u16,
    ) {
        let x = i32::from(panel.x);
        let top = i32::from(panel.y);
        let body_top = top + i32::from(panel.title.is_some());
        let footer = top + i32::from(height) - 1;
        let blank = " ".repeat(usize::from(width));

        for y in body_top..footer {
            self.draw_string(x, y, &blank, panel.main_color, false, false);
        }
        for (row, i) in scroll.visible(lines.len()).enumerate() {
            let line = clip_to_width(lines[i].as_ref(), usize::from(width));
            let y = body_top + i32::try_from(row).unwrap_or(i32::MAX);
            self.draw_string(x, y, line, panel.main_color, false, false);
        }

        if let Some(title) = &panel.title {
            self.draw_string(x, top, &blank, panel.bar_color, false, false);
            let title_x = x + centered_x(width, display_width(title));
            self.draw_string(title_x, top, title, panel.bar_color, false, false);
        }

        self.draw_string(x, footer, &blank, panel.bar_color, false, false);
        let hint_x = x + centered_x(width, display_width(BACK_HINT));
        self.draw_string(hint_x, footer, BACK_HINT, panel.bar_color, false, false);
        if scroll.max_offset() > 0 {
            let indicator = format!("({}/{})", scroll.offset(), scroll.max_offset());
            self.draw_string(x, footer, &indicator, panel.bar_color, false, false);
        }
    }

    /// Draw `options` one every other row from `top_y`, centred, with the
    /// selected one in `colors.selected`.
    pub fn draw_menu<S: AsRef<str>>(
        &mut self,
        top_y: u16,
        options: &[S],
        selected: Option<usize>,
        colors: &MenuColors,
    ) -> Result<()> {
        for (i, option) in options.iter().enumerate() {
            let y = i32::from(top_y) + 2 * i32::try_from(i).unwrap_or(i32::MAX / 2);
            let pair = if selected == Some(i) {
                colors.selected
            } else {
                colors.deselected
            };
            self.draw_string_centered(y, &format!(" {} ", option.as_ref()), pair);
        }
        self.refresh()
    }

    /// Run a menu until the user confirms an option, and return its index.
    ///
    /// `selected` is the initially highlighted option; `None` starts with no
    /// highlight.
    pub fn menu<S: AsRef<str>>(
        &mut self,
        top_y: u16,
        options: &[S],
        selected: Option<usize>,
        colors: &MenuColors,
        policy: MenuPolicy,
    ) -> Result<usize> {
        let labels = options.iter().map(|o| o.as_ref().to_owned()).collect();
        let mut state = MenuState::new(labels, selected).with_policy(policy);
        debug!(options = options.len(), ?policy, "menu opened");

        loop {
            self.draw_menu(top_y, state.options(), state.selected(), colors)?;
            let event = self.read_key(false)?;
            let geometry = MenuGeometry {
                top_y,
                width: self.width(),
                pointer: self.mouse_location,
            };
            if let MenuOutcome::Confirmed(index) = state.advance(&event, &geometry) {
                debug!(index, "menu confirmed");
                return Ok(index);
            }
        }
    }
}
