//! Cell arithmetic shared by drawing and hit-testing.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left column that centres a span of `span` columns in `width` columns.
///
/// Negative when the span is wider than the viewport. Menu labels are drawn
/// and hit-tested with this same value so clicks land where labels appear.
pub fn centered_x(width: u16, span: usize) -> i32 {
    let span = i32::try_from(span).unwrap_or(i32::MAX);
    (i32::from(width) - span).div_euclid(2)
}

/// Longest prefix of `text` that fits in `max` columns.
pub fn clip_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return &text[..i];
        }
        used += w;
    }
    text
}

/// Fit a draw at `(x, y)` onto a `cols` x `rows` surface.
///
/// Returns `None` when the start cell is off the surface; otherwise the
/// unsigned position and the part of `text` that fits before the right edge.
pub fn clip_to_surface(
    x: i32,
    y: i32,
    text: &str,
    cols: u16,
    rows: u16,
) -> Option<(u16, u16, &str)> {
    let x = u16::try_from(x).ok().filter(|&x| x < cols)?;
    let y = u16::try_from(y).ok().filter(|&y| y < rows)?;
    let clipped = clip_to_width(text, usize::from(cols - x));
    Some((x, y, clipped))
}
