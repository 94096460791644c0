pub mod completions;
pub mod help;
pub mod menu;
pub mod view;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use termwin::color::{BLACK, BLUE, CYAN, WHITE};
use termwin::{ColorPair, WindowConfig};
use tracing_subscriber::EnvFilter;

/// Exit code for a run cut short by Ctrl-C.
pub(crate) const INTERRUPTED: i32 = 130;

/// Send logs to `path`. Without a path nothing is installed: stderr is the
/// screen while a widget runs.
pub(crate) fn init_logging(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Could not open log file {}: {e}", path.display());
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Load `--config`, or the built-in demo palette when none was given.
///
/// Pair 1 is the highlight / bar colour, pair 2 the panel body.
pub(crate) fn load_config(path: Option<&Path>) -> Result<WindowConfig, String> {
    match path {
        Some(path) => WindowConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(WindowConfig {
            pairs: vec![
                ColorPair::new(BLACK, CYAN),
                ColorPair::new(WHITE, BLUE),
            ],
            ..WindowConfig::default()
        }),
    }
}
