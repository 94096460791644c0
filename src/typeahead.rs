//! Prefix matching for menu "smart jump".
//!
//! Typed characters accumulate into a lowercase buffer. When the buffer
//! stops matching any label, its oldest characters are dropped until it
//! matches again, so a burst of stray keys settles on the latest input
//! instead of leaving an impossible prefix behind.

/// Buffer and matches after one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrowed {
    pub typed: String,
    /// Indices of labels starting with `typed`, in label order.
    pub matches: Vec<usize>,
}

/// Indices of the labels whose lowercase form starts with `prefix`.
///
/// `prefix` is expected to be lowercase already.
pub fn matching<S: AsRef<str>>(prefix: &str, labels: &[S]) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.as_ref().to_lowercase().starts_with(prefix))
        .map(|(i, _)| i)
        .collect()
}

/// Extend `typed` with `c` and shrink from the front until something matches.
///
/// The buffer ends up empty only when nothing at all can match, which for a
/// non-empty label list means every label matches the empty prefix.
pub fn extend<S: AsRef<str>>(typed: &str, c: char, labels: &[S]) -> Narrowed {
    let mut typed = typed.to_owned();
    typed.extend(c.to_lowercase());
    loop {
        let matches = matching(&typed, labels);
        if !matches.is_empty() || typed.is_empty() {
            return Narrowed { typed, matches };
        }
        typed.remove(0);
    }
}
