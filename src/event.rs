//! Input events as the widgets see them.
//!
//! Backends translate whatever the terminal reports into [`KeyEvent`]. Mouse
//! records go through a curses-style button bitmask ([`MouseMask`]) and are
//! then collapsed into the handful of [`MouseKind`]s the widgets react to.

use crate::error::Result;
use bitflags::bitflags;
use crossterm::event::{self as ct, KeyCode, KeyEventKind, KeyModifiers, MouseButton};

/// One logical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character.
    Char(char),
    Key(KeyName),
    /// The terminal changed size; geometry must be re-read.
    Resize,
    Mouse(MouseEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyName {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Tab,
    Esc,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    ButtonOneReleased,
    ScrollDown,
    ScrollUp,
    ButtonThreeReleased,
    Unknown,
}

/// A classified mouse event and the cell the pointer was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseKind,
    pub column: u16,
    pub row: u16,
}

bitflags! {
    /// Button state bits, five per button, in the order released, pressed,
    /// clicked, double-clicked, triple-clicked.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseMask: u32 {
        const BUTTON1_RELEASED = 1 << 0;
        const BUTTON1_PRESSED = 1 << 1;
        const BUTTON1_CLICKED = 1 << 2;
        const BUTTON1_DOUBLE_CLICKED = 1 << 3;
        const BUTTON1_TRIPLE_CLICKED = 1 << 4;

        const BUTTON2_RELEASED = 1 << 5;
        const BUTTON2_PRESSED = 1 << 6;
        const BUTTON2_CLICKED = 1 << 7;
        const BUTTON2_DOUBLE_CLICKED = 1 << 8;
        const BUTTON2_TRIPLE_CLICKED = 1 << 9;

        const BUTTON3_RELEASED = 1 << 10;
        const BUTTON3_PRESSED = 1 << 11;
        const BUTTON3_CLICKED = 1 << 12;
        const BUTTON3_DOUBLE_CLICKED = 1 << 13;
        const BUTTON3_TRIPLE_CLICKED = 1 << 14;

        const BUTTON4_RELEASED = 1 << 15;
        const BUTTON4_PRESSED = 1 << 16;
        const BUTTON4_CLICKED = 1 << 17;
        const BUTTON4_DOUBLE_CLICKED = 1 << 18;
        const BUTTON4_TRIPLE_CLICKED = 1 << 19;

        const BUTTON2_ANY = Self::BUTTON2_RELEASED.bits()
            | Self::BUTTON2_PRESSED.bits()
            | Self::BUTTON2_CLICKED.bits()
            | Self::BUTTON2_DOUBLE_CLICKED.bits()
            | Self::BUTTON2_TRIPLE_CLICKED.bits();

        const BUTTON4_ANY = Self::BUTTON4_RELEASED.bits()
            | Self::BUTTON4_PRESSED.bits()
            | Self::BUTTON4_CLICKED.bits()
            | Self::BUTTON4_DOUBLE_CLICKED.bits()
            | Self::BUTTON4_TRIPLE_CLICKED.bits();
    }
}

/// Collapse a button mask into a [`MouseKind`].
///
/// Checked in a fixed order so that a mask carrying several buttons always
/// classifies the same way: button-1 release wins over everything.
pub fn classify(mask: MouseMask) -> MouseKind {
    if mask.contains(MouseMask::BUTTON1_RELEASED) {
        MouseKind::ButtonOneReleased
    } else if mask.intersects(MouseMask::BUTTON2_ANY) {
        MouseKind::ScrollDown
    } else if mask.contains(MouseMask::BUTTON3_RELEASED) {
        MouseKind::ButtonThreeReleased
    } else if mask.intersects(MouseMask::BUTTON4_ANY) {
        MouseKind::ScrollUp
    } else {
        MouseKind::Unknown
    }
}

/// Source of input events for a window.
pub trait EventSource {
    /// Block until the next event. Ctrl-C surfaces as
    /// [`Error::Interrupted`](crate::Error::Interrupted).
    fn next_event(&mut self) -> Result<KeyEvent>;

    /// Drop anything typed ahead that has not been read yet.
    fn flush_pending_input(&mut self) -> Result<()>;

    fn sleep(&mut self, millis: u64);
}

// ── crossterm translation ───────────────────────────────────────────────

/// Encode a crossterm mouse record in the curses bit layout.
///
/// Wheel down reports as button 2 and wheel up as button 4. Motion, drags
/// and the middle button have no bits and classify as unknown.
pub fn mouse_mask(kind: ct::MouseEventKind) -> MouseMask {
    match kind {
        ct::MouseEventKind::Down(MouseButton::Left) => MouseMask::BUTTON1_PRESSED,
        ct::MouseEventKind::Up(MouseButton::Left) => MouseMask::BUTTON1_RELEASED,
        ct::MouseEventKind::Down(MouseButton::Right) => MouseMask::BUTTON3_PRESSED,
        ct::MouseEventKind::Up(MouseButton::Right) => MouseMask::BUTTON3_RELEASED,
        ct::MouseEventKind::ScrollDown => MouseMask::BUTTON2_PRESSED,
        ct::MouseEventKind::ScrollUp => MouseMask::BUTTON4_PRESSED,
        _ => MouseMask::empty(),
    }
}

impl From<ct::MouseEvent> for MouseEvent {
    fn from(event: ct::MouseEvent) -> Self {
        MouseEvent {
            kind: classify(mouse_mask(event.kind)),
            column: event.column,
            row: event.row,
        }
    }
}

/// True for Ctrl-C, which raw mode delivers as an ordinary key.
pub fn is_interrupt(key: &ct::KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C'))
}

/// Translate a crossterm key press. Releases, control chords and keys the
/// widgets have no use for yield `None`.
pub fn translate_key(key: &ct::KeyEvent) -> Option<KeyEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let name = match key.code {
        KeyCode::Char(c) => {
            // CONTROL and ALT together is AltGr on Windows, which composes a
            // printable character; either one alone is a chord.
            let control = key.modifiers.contains(KeyModifiers::CONTROL);
            let alt = key.modifiers.contains(KeyModifiers::ALT);
            if control != alt || c.is_control() {
                return None;
            }
            return Some(KeyEvent::Char(c));
        }
        KeyCode::Up => KeyName::Up,
        KeyCode::Down => KeyName::Down,
        KeyCode::Left => KeyName::Left,
        KeyCode::Right => KeyName::Right,
        KeyCode::Enter => KeyName::Enter,
        KeyCode::Backspace => KeyName::Backspace,
        KeyCode::Tab => KeyName::Tab,
        KeyCode::Esc => KeyName::Esc,
        KeyCode::Home => KeyName::Home,
        KeyCode::End => KeyName::End,
        KeyCode::PageUp => KeyName::PageUp,
        KeyCode::PageDown => KeyName::PageDown,
        KeyCode::Insert => KeyName::Insert,
        KeyCode::Delete => KeyName::Delete,
        KeyCode::F(n) => KeyName::F(n),
        _ => return None,
    };
    Some(KeyEvent::Key(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> ct::KeyEvent {
        ct::KeyEvent::new(code, modifiers)
    }

    #[test]
    fn button_one_release_wins_over_everything() {
        let mask = MouseMask::BUTTON1_RELEASED
            | MouseMask::BUTTON2_PRESSED
            | MouseMask::BUTTON3_RELEASED
            | MouseMask::BUTTON4_PRESSED;
        assert_eq!(classify(mask), MouseKind::ButtonOneReleased);
    }

    #[test]
    fn button_two_states_collapse_to_scroll_down() {
        for bit in [
            MouseMask::BUTTON2_RELEASED,
            MouseMask::BUTTON2_PRESSED,
            MouseMask::BUTTON2_CLICKED,
            MouseMask::BUTTON2_DOUBLE_CLICKED,
            MouseMask::BUTTON2_TRIPLE_CLICKED,
        ] {
            assert_eq!(classify(bit), MouseKind::ScrollDown);
            assert_eq!(classify(bit | MouseMask::BUTTON3_RELEASED), MouseKind::ScrollDown);
        }
    }

    #[test]
    fn button_three_beats_button_four() {
        assert_eq!(
            classify(MouseMask::BUTTON3_RELEASED | MouseMask::BUTTON4_CLICKED),
            MouseKind::ButtonThreeReleased
        );
        assert_eq!(classify(MouseMask::BUTTON4_TRIPLE_CLICKED), MouseKind::ScrollUp);
    }

    #[test]
    fn unmapped_states_are_unknown() {
        assert_eq!(classify(MouseMask::empty()), MouseKind::Unknown);
        assert_eq!(classify(MouseMask::BUTTON1_PRESSED), MouseKind::Unknown);
        assert_eq!(classify(MouseMask::BUTTON3_PRESSED), MouseKind::Unknown);
    }

    #[test]
    fn crossterm_mouse_records() {
        let event = ct::MouseEvent {
            kind: ct::MouseEventKind::Up(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            MouseEvent::from(event),
            MouseEvent {
                kind: MouseKind::ButtonOneReleased,
                column: 12,
                row: 4
            }
        );
        assert_eq!(
            classify(mouse_mask(ct::MouseEventKind::ScrollDown)),
            MouseKind::ScrollDown
        );
        assert_eq!(
            classify(mouse_mask(ct::MouseEventKind::ScrollUp)),
            MouseKind::ScrollUp
        );
        assert_eq!(
            classify(mouse_mask(ct::MouseEventKind::Up(MouseButton::Middle))),
            MouseKind::Unknown
        );
        assert_eq!(
            classify(mouse_mask(ct::MouseEventKind::Moved)),
            MouseKind::Unknown
        );
    }

    #[test]
    fn keys() {
        assert_eq!(
            translate_key(&press(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(KeyEvent::Char('x'))
        );
        assert_eq!(
            translate_key(&press(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(KeyEvent::Char('X'))
        );
        assert_eq!(
            translate_key(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(KeyEvent::Key(KeyName::Enter))
        );
        assert_eq!(
            translate_key(&press(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            translate_key(&press(KeyCode::Char('a'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(translate_key(&press(KeyCode::Null, KeyModifiers::NONE)), None);

        let mut release = press(KeyCode::Down, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate_key(&release), None);
    }

    #[test]
    fn altgr_characters_reach_the_widgets() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '{', '€'] {
            assert_eq!(translate_key(&press(KeyCode::Char(c), altgr)), Some(KeyEvent::Char(c)));
        }
    }

    #[test]
    fn ctrl_c_is_an_interrupt() {
        assert!(is_interrupt(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
