use crate::color::ColorPair;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a [`Window`](crate::Window) needs at construction.
///
/// Every field has a default, so a config file only has to name what it
/// changes:
///
/// ```json
/// { "height_limit": 20, "pairs": [{ "fg": 7, "bg": 4 }], "background": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Cap on the usable width; the real terminal width wins when smaller.
    pub width_limit: Option<u16>,
    /// Cap on the usable height.
    pub height_limit: Option<u16>,
    /// Pair painted behind everything on `clear`. 0 keeps the terminal's own.
    pub background: u16,
    /// Colour pairs, assigned ids 1, 2, ... in order.
    pub pairs: Vec<ColorPair>,
    /// Capture mouse events.
    pub mouse: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width_limit: None,
            height_limit: None,
            background: 0,
            pairs: Vec::new(),
            mouse: true,
        }
    }
}

impl WindowConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
