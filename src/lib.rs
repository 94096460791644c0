//! Terminal window toolkit built on crossterm.
//!
//! A [`Window`] wraps a terminal backend and hosts two interactive widgets:
//! [`Window::menu`] (arrow keys, typeahead "smart jump" and mouse clicks) and
//! [`Window::text_area`] (a scrollable text panel). The state machines behind
//! them, [`MenuState`] and [`ScrollState`], are plain values that can be
//! driven without a terminal.
//!
//! ```no_run
//! use termwin::{MenuColors, MenuPolicy, WindowConfig};
//!
//! let config = WindowConfig::default();
//! let _picked = termwin::run(&config, |win| {
//!     let options = ["Start".to_string(), "Quit".to_string()];
//!     win.menu(2, &options, Some(0), &MenuColors::default(), MenuPolicy::default())
//! })?;
//! # Ok::<(), termwin::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod menu;
pub mod scroll;
pub mod terminal;
pub mod typeahead;
pub mod window;

pub use color::{ColorPair, Palette, Style};
pub use config::WindowConfig;
pub use error::{Error, Result};
pub use event::{EventSource, KeyEvent, KeyName, MouseEvent, MouseKind, MouseMask};
pub use menu::{MenuGeometry, MenuOutcome, MenuPolicy, MenuState};
pub use scroll::{ScrollOutcome, ScrollState};
pub use terminal::{run, CrosstermTerminal};
pub use window::{MenuColors, Renderer, TextPanel, Window};
