//! Colour pairs and draw styles.
//!
//! A pair id is what every draw call takes. Id 0 is the terminal's default
//! foreground/background; ids `1..=n` map to the configured pairs in order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const BLACK: u8 = 0;
pub const RED: u8 = 1;
pub const GREEN: u8 = 2;
pub const YELLOW: u8 = 3;
pub const BLUE: u8 = 4;
pub const MAGENTA: u8 = 5;
pub const CYAN: u8 = 6;
pub const WHITE: u8 = 7;
pub const BROWN: u8 = 88;

/// Upper bound on pairs for any terminal, matching the classic signed
/// 16-bit pair table.
const MAX_PAIRS: usize = 32767;

/// Foreground and background as ANSI 256-colour indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fg: u8,
    pub bg: u8,
}

impl ColorPair {
    pub const fn new(fg: u8, bg: u8) -> Self {
        ColorPair { fg, bg }
    }
}

/// Pen used for a single draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub pair: u16,
    pub bold: bool,
    pub underline: bool,
}

/// Validated pair table, established once when a window opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pairs: Vec<ColorPair>,
}

impl Palette {
    /// Build a palette for a terminal that supports `supported` pairs
    /// (counting the reserved default pair).
    pub fn new(pairs: Vec<ColorPair>, supported: usize) -> Result<Self> {
        if pairs.len() >= supported {
            return Err(Error::TooManyColorPairs {
                requested: pairs.len(),
                supported,
            });
        }
        Ok(Palette { pairs })
    }

    /// Resolve a pair id. `None` means "terminal default" (id 0 or unknown).
    pub fn get(&self, id: u16) -> Option<ColorPair> {
        let index = usize::from(id).checked_sub(1)?;
        self.pairs.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Number of colours the attached terminal advertises.
pub fn colors_supported() -> u16 {
    crossterm::style::available_color_count()
}

/// Pair capacity for a terminal with `colors` colours: one pair per
/// foreground/background combination, capped at the pair-table size.
pub fn pairs_supported(colors: u16) -> usize {
    let colors = usize::from(colors);
    (colors * colors).min(MAX_PAIRS)
}
