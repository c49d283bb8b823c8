mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flipcards", about = "Vocabulary flashcard trainer", version)]
struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the word lists
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Review words interactively
    #[cfg(feature = "tui")]
    Review,

    /// Show how many words are learned and left
    Stats,

    /// Forget progress and start over with the full word list
    Reset {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.config.as_deref(), cli.data_dir.as_deref())?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Review) => {
            tui::run(app)?;
        }
        Some(Command::Stats) => {
            commands::stats::run(&app, &cli.format)?;
        }
        Some(Command::Reset { yes }) => {
            commands::reset::run(&app, yes, &cli.format)?;
        }
    }

    Ok(())
}
