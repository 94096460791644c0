use super::{load_config, INTERRUPTED};
use std::path::Path;
use termwin::{MenuColors, MenuPolicy};

pub fn run(
    config: Option<&Path>,
    options: &[String],
    title: Option<String>,
    top: u16,
    select: Option<usize>,
    policy: MenuPolicy,
) {
    match run_inner(config, options, title.as_deref(), top, select, policy) {
        Ok(Some(choice)) => println!("{choice}"),
        Ok(None) => std::process::exit(INTERRUPTED),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_inner(
    config: Option<&Path>,
    options: &[String],
    title: Option<&str>,
    top: u16,
    select: Option<usize>,
    policy: MenuPolicy,
) -> Result<Option<String>, String> {
    let config = load_config(config)?;
    let colors = MenuColors {
        selected: 1,
        deselected: 0,
    };

    let (title_y, top) = placement(title.is_some(), top);
    let picked = termwin::run(&config, |win| {
        if let (Some(title), Some(y)) = (title, title_y) {
            win.draw_string_centered(i32::from(y), title, 0);
        }
        win.menu(top, options, select, &colors, policy)
    })
    .map_err(|e| e.to_string())?;

    Ok(picked.map(|index| options[index].clone()))
}

/// Title row and menu top. A title sits two rows above the first option, so
/// the menu moves down when `top` leaves no room for it.
fn placement(titled: bool, top: u16) -> (Option<u16>, u16) {
    if titled {
        let top = top.max(2);
        (Some(top - 2), top)
    } else {
        (None, top)
    }
}
