//! Menu selection state machine.
//!
//! [`MenuState::advance`] consumes one [`KeyEvent`] at a time and either
//! moves the highlight or reports a confirmed choice. Rendering and input
//! live in [`Window::menu`](crate::Window::menu); this module never touches
//! the terminal.

use crate::event::{KeyEvent, KeyName, MouseKind};
use crate::layout::{centered_x, display_width};
use crate::typeahead;
use tracing::trace;

/// Behaviour switches for a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPolicy {
    /// Typing moves the highlight to options starting with the typed text.
    pub smart_jump: bool,
    /// Confirm as soon as typing leaves exactly one candidate.
    pub auto_enter: bool,
    /// Confirm on click instead of only highlighting.
    pub mouse_enter: bool,
}

impl Default for MenuPolicy {
    fn default() -> Self {
        MenuPolicy {
            smart_jump: true,
            auto_enter: false,
            mouse_enter: true,
        }
    }
}

/// Where the menu sits on screen, and where the pointer last was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGeometry {
    /// Row of the first option. Option `i` is on row `top_y + 2 * i`.
    pub top_y: u16,
    /// Viewport width the labels are centred in.
    pub width: u16,
    /// Last known pointer cell, `(column, row)`.
    pub pointer: (u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Confirmed(usize),
}

#[derive(Debug, Clone)]
pub struct MenuState {
    options: Vec<String>,
    selected: Option<usize>,
    typed: String,
    policy: MenuPolicy,
}

impl MenuState {
    /// Start a menu. An out-of-range `selected` is treated as no selection.
    pub fn new(options: Vec<String>, selected: Option<usize>) -> Self {
        let selected = selected.filter(|&i| i < options.len());
        MenuState {
            options,
            selected,
            typed: String::new(),
            policy: MenuPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MenuPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Current typeahead buffer (lowercase).
    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn advance(&mut self, event: &KeyEvent, geometry: &MenuGeometry) -> MenuOutcome {
        match *event {
            KeyEvent::Key(KeyName::Down) => {
                self.move_down();
                MenuOutcome::Continue
            }
            KeyEvent::Key(KeyName::Up) => {
                self.move_up();
                MenuOutcome::Continue
            }
            KeyEvent::Key(KeyName::Enter | KeyName::Right) => match self.selected {
                Some(i) => MenuOutcome::Confirmed(i),
                None => MenuOutcome::Continue,
            },
            KeyEvent::Mouse(mouse) if mouse.kind == MouseKind::ButtonOneReleased => {
                self.click(geometry)
            }
            KeyEvent::Char(c) if self.policy.smart_jump => self.type_char(c),
            _ => MenuOutcome::Continue,
        }
    }

    fn move_down(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    fn move_up(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    fn click(&mut self, geometry: &MenuGeometry) -> MenuOutcome {
        let Some(hit) = hit_test(&self.options, geometry) else {
            return MenuOutcome::Continue;
        };
        self.selected = Some(hit);
        if self.policy.mouse_enter {
            MenuOutcome::Confirmed(hit)
        } else {
            MenuOutcome::Continue
        }
    }

    fn type_char(&mut self, c: char) -> MenuOutcome {
        let narrowed = typeahead::extend(&self.typed, c, self.options.as_slice());
        trace!(typed = %narrowed.typed, matches = narrowed.matches.len(), "typeahead");
        self.typed = narrowed.typed;
        let matches = narrowed.matches;

        if let &[only] = matches.as_slice() {
            if self.policy.auto_enter {
                self.selected = Some(only);
                return MenuOutcome::Confirmed(only);
            }
        }

        if !self.typed.is_empty() {
            // Step forward through same-prefix options on repeated typing.
            let next = matches
                .iter()
                .copied()
                .find(|&m| self.selected.map_or(true, |s| m > s))
                .or_else(|| matches.first().copied());
            if next.is_some() {
                self.selected = next;
            }
        }
        MenuOutcome::Continue
    }
}

/// Index of the option whose label the pointer is on, if any.
///
/// Only the label row of each two-row band is clickable, and only within the
/// centred `" label "` span as [`Window::draw_menu`](crate::Window::draw_menu)
/// draws it.
pub fn hit_test(options: &[String], geometry: &MenuGeometry) -> Option<usize> {
    let (column, row) = geometry.pointer;
    let offset = row.checked_sub(geometry.top_y)?;
    if offset % 2 != 0 {
        return None;
    }
    let index = usize::from(offset / 2);
    let label = options.get(index)?;

    let span = display_width(label) + 2;
    let min_x = centered_x(geometry.width, span);
    let max_x = min_x + i32::try_from(span).ok()?;
    let column = i32::from(column);
    (column >= min_x && column < max_x).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseEvent;

    fn menu(labels: &[&str], selected: Option<usize>) -> MenuState {
        MenuState::new(labels.iter().map(|s| s.to_string()).collect(), selected)
    }

    fn geometry() -> MenuGeometry {
        MenuGeometry {
            top_y: 3,
            width: 40,
            pointer: (0, 0),
        }
    }

    const DOWN: KeyEvent = KeyEvent::Key(KeyName::Down);
    const UP: KeyEvent = KeyEvent::Key(KeyName::Up);
    const ENTER: KeyEvent = KeyEvent::Key(KeyName::Enter);

    fn click_at(column: u16, row: u16) -> (KeyEvent, MenuGeometry) {
        let event = KeyEvent::Mouse(MouseEvent {
            kind: MouseKind::ButtonOneReleased,
            column,
            row,
        });
        let geometry = MenuGeometry {
            pointer: (column, row),
            ..geometry()
        };
        (event, geometry)
    }

    #[test]
    fn down_wraps_past_the_end() {
        let mut state = menu(&["A", "B", "C"], Some(1));
        state.advance(&DOWN, &geometry());
        state.advance(&DOWN, &geometry());
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn len_steps_return_to_start() {
        let labels = ["one", "two", "three", "four", "five"];
        for start in 0..labels.len() {
            let mut state = menu(&labels, Some(start));
            for _ in 0..labels.len() {
                state.advance(&DOWN, &geometry());
            }
            assert_eq!(state.selected(), Some(start));

            for _ in 0..labels.len() {
                state.advance(&UP, &geometry());
            }
            assert_eq!(state.selected(), Some(start));
        }
    }

    #[test]
    fn no_selection_is_normalised_by_movement() {
        let mut state = menu(&["A", "B", "C"], None);
        state.advance(&DOWN, &geometry());
        assert_eq!(state.selected(), Some(0));

        let mut state = menu(&["A", "B", "C"], Some(17));
        assert_eq!(state.selected(), None);
        state.advance(&UP, &geometry());
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn confirm_needs_a_selection() {
        let mut state = menu(&["A", "B"], None);
        assert_eq!(state.advance(&ENTER, &geometry()), MenuOutcome::Continue);
        state.advance(&UP, &geometry());
        assert_eq!(state.advance(&ENTER, &geometry()), MenuOutcome::Confirmed(1));
        assert_eq!(
            state.advance(&KeyEvent::Key(KeyName::Right), &geometry()),
            MenuOutcome::Confirmed(1)
        );
    }

    #[test]
    fn empty_menu_ignores_everything() {
        let mut state = menu(&[], None);
        for event in [DOWN, UP, ENTER, KeyEvent::Char('x'), KeyEvent::Resize] {
            assert_eq!(state.advance(&event, &geometry()), MenuOutcome::Continue);
            assert_eq!(state.selected(), None);
        }
        let (event, geometry) = click_at(20, 3);
        assert_eq!(state.advance(&event, &geometry), MenuOutcome::Continue);
    }

    #[test]
    fn click_on_label_row_selects() {
        // " Gamma " is 7 wide, centred in 40 columns at x = 16..23, row 3 + 4.
        let labels = ["Alpha", "Beta", "Gamma"];
        let mut state = menu(&labels, Some(0)).with_policy(MenuPolicy {
            mouse_enter: false,
            ..MenuPolicy::default()
        });

        let (event, at) = click_at(16, 7);
        assert_eq!(state.advance(&event, &at), MenuOutcome::Continue);
        assert_eq!(state.selected(), Some(2));

        let mut state = menu(&labels, Some(0)).with_policy(MenuPolicy {
            mouse_enter: false,
            ..MenuPolicy::default()
        });
        let (event, below) = click_at(16, 8);
        state.advance(&event, &below);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn click_outside_the_label_span_is_ignored() {
        let mut state = menu(&["Alpha", "Beta", "Gamma"], Some(0));
        for column in [15, 23] {
            let (event, at) = click_at(column, 7);
            assert_eq!(state.advance(&event, &at), MenuOutcome::Continue);
            assert_eq!(state.selected(), Some(0));
        }
        let (event, at) = click_at(22, 7);
        assert_eq!(state.advance(&event, &at), MenuOutcome::Confirmed(2));

        // Above the menu and past the last option.
        let (event, at) = click_at(17, 1);
        assert_eq!(state.advance(&event, &at), MenuOutcome::Continue);
        let (event, at) = click_at(17, 9);
        assert_eq!(state.advance(&event, &at), MenuOutcome::Continue);
    }

    #[test]
    fn other_mouse_buttons_do_nothing() {
        let mut state = menu(&["Alpha"], None);
        let event = KeyEvent::Mouse(MouseEvent {
            kind: MouseKind::ButtonThreeReleased,
            column: 17,
            row: 3,
        });
        let at = MenuGeometry {
            pointer: (17, 3),
            ..geometry()
        };
        assert_eq!(state.advance(&event, &at), MenuOutcome::Continue);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn typing_cycles_through_shared_prefix() {
        let mut state = menu(&["Alpex", "Beta", "Alpha", "Alps"], Some(1));
        state.advance(&KeyEvent::Char('a'), &geometry());
        assert_eq!(state.selected(), Some(2));
        // "aa" has no match, shrinks to "a" and steps to the next "a" option.
        state.advance(&KeyEvent::Char('a'), &geometry());
        assert_eq!(state.typed(), "a");
        assert_eq!(state.selected(), Some(3));
        state.advance(&KeyEvent::Char('a'), &geometry());
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn typing_from_no_selection_picks_first_match() {
        let mut state = menu(&["Alpex", "Alpha", "Beta"], None);
        state.advance(&KeyEvent::Char('A'), &geometry());
        assert_eq!(state.typed(), "a");
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn auto_enter_fires_once_on_a_unique_prefix() {
        let policy = MenuPolicy {
            auto_enter: true,
            ..MenuPolicy::default()
        };
        let mut state = menu(&["Alpex", "Alpha", "Beta"], None).with_policy(policy);
        let outcomes: Vec<MenuOutcome> = "alph"
            .chars()
            .map(|c| state.advance(&KeyEvent::Char(c), &geometry()))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                MenuOutcome::Continue,
                MenuOutcome::Continue,
                MenuOutcome::Continue,
                MenuOutcome::Confirmed(1)
            ]
        );
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn without_auto_enter_a_unique_prefix_only_moves() {
        let mut state = menu(&["Alpex", "Alpha", "Beta"], Some(0));
        assert_eq!(
            state.advance(&KeyEvent::Char('b'), &geometry()),
            MenuOutcome::Continue
        );
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn smart_jump_can_be_disabled() {
        let mut state = menu(&["Alpex", "Beta"], Some(0)).with_policy(MenuPolicy {
            smart_jump: false,
            ..MenuPolicy::default()
        });
        state.advance(&KeyEvent::Char('b'), &geometry());
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.typed(), "");
    }

    #[test]
    fn wide_labels_hit_test_by_display_width() {
        let options = vec!["日本".to_string()];
        // " 日本 " is 6 columns wide: x = 7..13 in a 20 column viewport.
        let geometry = MenuGeometry {
            top_y: 0,
            width: 20,
            pointer: (12, 0),
        };
        assert_eq!(hit_test(&options, &geometry), Some(0));
        let geometry = MenuGeometry {
            pointer: (13, 0),
            ..geometry
        };
        assert_eq!(hit_test(&options, &geometry), None);
    }
}
