use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

/// Try out termwin's menu and text panel widgets.
#[derive(Parser)]
#[command(name = "termwin", version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    /// JSON window config (size limits, colour pairs, background, mouse).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs here. Filter with RUST_LOG (default: info).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Pick one of OPTIONS and print it.
    Menu {
        /// Option labels, top to bottom.
        #[arg(required = true)]
        options: Vec<String>,

        /// Heading drawn above the options.
        #[arg(long)]
        title: Option<String>,

        /// Row of the first option (at least 2 when a title is shown).
        #[arg(long, default_value_t = 2)]
        top: u16,

        /// Option highlighted at start (0-based). None if omitted.
        #[arg(long)]
        select: Option<usize>,

        /// Disable jumping to options by typing their first letters.
        #[arg(long)]
        no_smart_jump: bool,

        /// Pick an option as soon as typing leaves only one candidate.
        #[arg(long)]
        auto_enter: bool,

        /// Clicking only highlights an option instead of picking it.
        #[arg(long)]
        no_mouse_enter: bool,
    },

    /// Page through a text file.
    View {
        path: PathBuf,

        /// Title bar text. Defaults to the file name.
        #[arg(long)]
        title: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    commands::init_logging(cli.log_file.as_deref());

    match cli.command {
        None => commands::help::run(),
        Some(Command::Menu {
            options,
            title,
            top,
            select,
            no_smart_jump,
            auto_enter,
            no_mouse_enter,
        }) => {
            let policy = termwin::MenuPolicy {
                smart_jump: !no_smart_jump,
                auto_enter,
                mouse_enter: !no_mouse_enter,
            };
            commands::menu::run(cli.config.as_deref(), &options, title, top, select, policy);
        }
        Some(Command::View { path, title }) => {
            commands::view::run(cli.config.as_deref(), &path, title);
        }
        Some(Command::Completions { shell }) => commands::completions::run(shell),
    }
}
