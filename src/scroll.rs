//! Scroll position for a text panel.
//!
//! A panel of `height` rows spends one row on the footer and, when titled,
//! one on the title bar. The rest shows content starting at `offset`.

use crate::event::{KeyEvent, KeyName, MouseKind};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Continue,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    max_offset: usize,
    rows: usize,
}

impl ScrollState {
    pub fn new(content_len: usize, height: u16, titled: bool) -> Self {
        let mut state = ScrollState {
            offset: 0,
            max_offset: 0,
            rows: 0,
        };
        state.resize(content_len, height, titled);
        state
    }

    /// Recompute the bounds for new geometry, keeping the offset in range.
    pub fn resize(&mut self, content_len: usize, height: u16, titled: bool) {
        self.rows = visible_rows(height, titled);
        self.max_offset = content_len.saturating_sub(self.rows);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Content rows on screen.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Indices of the lines currently on screen.
    pub fn visible(&self, content_len: usize) -> Range<usize> {
        let end = (self.offset + self.rows).min(content_len);
        self.offset.min(end)..end
    }

    pub fn advance(&mut self, event: &KeyEvent) -> ScrollOutcome {
        match *event {
            KeyEvent::Key(KeyName::Down) => self.scroll_down(),
            KeyEvent::Key(KeyName::Up) => self.scroll_up(),
            KeyEvent::Mouse(mouse) => match mouse.kind {
                MouseKind::ScrollDown => self.scroll_down(),
                MouseKind::ScrollUp => self.scroll_up(),
                _ => {}
            },
            KeyEvent::Char(' ') | KeyEvent::Key(KeyName::Enter) => {
                return ScrollOutcome::Dismissed;
            }
            _ => {}
        }
        ScrollOutcome::Continue
    }

    fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset);
    }

    fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}

/// Content rows in a panel of `height` rows.
pub fn visible_rows(height: u16, titled: bool) -> usize {
    usize::from(height).saturating_sub(1 + usize::from(titled))
}
