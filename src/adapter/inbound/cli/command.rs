//! Command-line interface definitions.
//!
//! Defines the CLI structure for boardctl using `clap`. Without a
//! subcommand the interactive menu starts; every menu action also has a
//! scriptable subcommand.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::{BoardId, CardId, ColumnId};

/// Kanban boards in the terminal
#[derive(Parser, Debug)]
#[command(name = "boardctl")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the SQLite database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the boardctl CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Apply pending database migrations
    Migrate,

    /// Manage boards
    #[command(subcommand)]
    Board(BoardCommand),

    /// Inspect columns
    #[command(subcommand)]
    Column(ColumnCommand),

    /// Manage cards
    #[command(subcommand)]
    Card(CardCommand),

    /// Show board statistics and the performance report
    Stats(StatsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `boardctl board`.
#[derive(Subcommand, Debug)]
pub enum BoardCommand {
    /// Create a board with its columns.
    Create(BoardCreateArgs),
    /// List every board.
    List,
    /// Show a board with per-column card counts.
    Show(BoardIdArg),
    /// Delete a board with all its columns and cards.
    Delete(BoardDeleteArgs),
}

/// Subcommands for `boardctl column`.
#[derive(Subcommand, Debug)]
pub enum ColumnCommand {
    /// Show a column and its cards.
    Show(ColumnShowArgs),
}

/// Subcommands for `boardctl card`.
#[derive(Subcommand, Debug)]
pub enum CardCommand {
    /// Create a card in the board's initial column.
    Create(CardCreateArgs),
    /// Move a card to the next column.
    Move(CardOnBoardArgs),
    /// Move a card to the cancel column.
    Cancel(CardOnBoardArgs),
    /// Block a card.
    Block(CardBlockArgs),
    /// Unblock a card.
    Unblock(CardUnblockArgs),
    /// Show a card.
    Show(CardIdArg),
}

/// Subcommands for `boardctl config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Arguments for `board create`.
///
/// Column names follow the board layout: one initial column, any number of
/// pending columns in order, then the final and cancel columns.
#[derive(Args, Debug)]
pub struct BoardCreateArgs {
    /// Board name.
    #[arg(long)]
    pub name: String,
    /// Name of the initial column.
    #[arg(long)]
    pub initial: String,
    /// Name of a pending column (repeatable, in order).
    #[arg(long = "pending")]
    pub pending: Vec<String>,
    /// Name of the final column.
    #[arg(long = "final")]
    pub final_column: String,
    /// Name of the cancel column.
    #[arg(long)]
    pub cancel: String,
}

#[derive(Args, Debug)]
pub struct BoardIdArg {
    /// Board id.
    pub id: BoardId,
}

/// Arguments for `board delete`.
#[derive(Args, Debug)]
pub struct BoardDeleteArgs {
    /// Board id.
    pub id: BoardId,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `column show`.
#[derive(Args, Debug)]
pub struct ColumnShowArgs {
    /// Board the column belongs to.
    #[arg(long)]
    pub board: BoardId,
    /// Column id.
    pub id: ColumnId,
}

/// Arguments for `card create`.
#[derive(Args, Debug)]
pub struct CardCreateArgs {
    /// Board to add the card to.
    #[arg(long)]
    pub board: BoardId,
    /// Card title.
    #[arg(long)]
    pub title: String,
    /// Card description (longer text is truncated).
    #[arg(long)]
    pub description: String,
}

/// A card addressed within a board.
#[derive(Args, Debug)]
pub struct CardOnBoardArgs {
    /// Board holding the card.
    #[arg(long)]
    pub board: BoardId,
    /// Card id.
    pub id: CardId,
}

/// Arguments for `card block`.
#[derive(Args, Debug)]
pub struct CardBlockArgs {
    /// Board holding the card.
    #[arg(long)]
    pub board: BoardId,
    /// Card id.
    pub id: CardId,
    /// Why the card is blocked.
    #[arg(long)]
    pub reason: String,
}

/// Arguments for `card unblock`.
#[derive(Args, Debug)]
pub struct CardUnblockArgs {
    /// Card id.
    pub id: CardId,
    /// Why the card is unblocked.
    #[arg(long)]
    pub reason: String,
}

#[derive(Args, Debug)]
pub struct CardIdArg {
    /// Card id.
    pub id: CardId,
}

/// Arguments for `stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Board id.
    pub board: BoardId,
}

/// Arguments for the `config init` subcommand.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
