use std::io;
use std::path::PathBuf;

/// Errors surfaced by windows, widgets and the terminal backend.
///
/// Off-screen draws and unrecognised mouse records are not errors; they are
/// dropped where they happen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More colour pairs were configured than the terminal can hold.
    /// Pair 0 is reserved, so `requested` must stay below `supported`.
    #[error("tried to initialize too many color pairs ({requested} requested, terminal supports {supported} including the default pair)")]
    TooManyColorPairs { requested: usize, supported: usize },

    /// The user pressed Ctrl-C while a widget was waiting for input.
    #[error("interrupted")]
    Interrupted,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
