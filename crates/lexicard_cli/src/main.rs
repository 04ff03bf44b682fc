//! Terminal shell for the Lexicard core.
//!
//! # Responsibility
//! - Parse commands and route them to `lexicard_core::CardService`.
//! - Own per-run session state (quiz score, current card).

mod app;
mod commands;
mod prompt;
mod storage;

use anyhow::Result;
use app::App;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexicard", about = "Spaced-repetition vocabulary trainer", version)]
struct Cli {
    /// Data directory holding the snapshot, config and logs
    #[arg(long, global = true, env = "LEXICARD_DATA")]
    data: Option<PathBuf>,

    /// Config file (default: <data>/lexicard.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured storage backend
    #[arg(long, global = true)]
    backend: Option<BackendArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BackendArg {
    Json,
    Sqlite,
}

#[derive(Subcommand)]
enum Command {
    /// Add a word/translation pair
    Add { word: String, translation: String },

    /// List all cards in display order
    List,

    /// Show one card by its display number
    Show {
        /// 1-based card number from `list`
        number: usize,
    },

    /// List cards due for review now
    Due,

    /// Review due cards interactively
    Review {
        /// Stop after this many cards
        #[arg(long)]
        rounds: Option<usize>,
    },

    /// Multiple-choice quiz over all cards
    Quiz {
        /// Number of questions
        #[arg(long, default_value = "10")]
        rounds: usize,
    },

    /// Study statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let app = App::bootstrap(cli.data, cli.config, cli.backend)?;
    let storage = app.open_storage()?;
    let mut service = app.open_service(&storage)?;

    match cli.command {
        Command::Add { word, translation } => commands::add::run(&mut service, &word, &translation),
        Command::List => commands::list::run_list(&service),
        Command::Show { number } => commands::list::run_show(&service, number),
        Command::Due => commands::list::run_due(&service),
        Command::Review { rounds } => commands::review::run(&mut service, rounds),
        Command::Quiz { rounds } => commands::quiz::run(&service, rounds),
        Command::Stats => commands::stats::run(&service),
    }
}
