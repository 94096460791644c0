use super::{load_config, INTERRUPTED};
use std::fs;
use std::path::Path;
use termwin::TextPanel;

pub fn run(config: Option<&Path>, path: &Path, title: Option<String>) {
    match run_inner(config, path, title) {
        Ok(true) => {}
        Ok(false) => std::process::exit(INTERRUPTED),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the user interrupted instead of dismissing.
fn run_inner(config: Option<&Path>, path: &Path, title: Option<String>) -> Result<bool, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    // Tabs would throw off column counting.
    let lines: Vec<String> = text.lines().map(|l| l.replace('\t', "    ")).collect();

    let title = title.or_else(|| {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });
    let panel = TextPanel {
        title,
        main_color: 2,
        bar_color: 1,
        ..TextPanel::default()
    };

    let config = load_config(config)?;
    let shown = termwin::run(&config, |win| win.text_area(lines.as_slice(), &panel))
        .map_err(|e| e.to_string())?;
    Ok(shown.is_some())
}
