//! Command dispatch.
//!
//! Applies the global flags, loads the configuration, starts logging and
//! hands off to the handler for the parsed subcommand.

use std::path::Path;

use tracing::debug;

use crate::adapter::inbound::cli::command::{
    BoardCommand, CardCommand, Cli, ColumnCommand, Commands, ConfigCommand,
};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::{
    board, card, column, config, diagnostic, menu, migrate, stats,
};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap::build_services;
use crate::infrastructure::config::settings::Config;

/// Execute the parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    // Writing a fresh config must work even when the current one is broken.
    if let Some(Commands::Config(ConfigCommand::Init(args))) = &cli.command {
        return config::execute_init(&cli.config, args.force);
    }

    let config = load_config(cli)?;
    debug!(database = %config.database.resolved_url(), "configuration loaded");

    match &cli.command {
        Some(Commands::Config(ConfigCommand::Show)) => {
            config::execute_show(&config, &cli.config, cli.db.is_some())
        }
        Some(Commands::Config(ConfigCommand::Init(_))) => Ok(()),
        Some(Commands::Migrate) => migrate::execute(&config),
        None | Some(Commands::Menu) => menu::run(&build_services(&config)?),
        Some(command) => dispatch(command, &config),
    }
}

fn dispatch(command: &Commands, config: &Config) -> Result<()> {
    let services = build_services(config)?;

    match command {
        Commands::Board(BoardCommand::Create(args)) => board::create(&services, args),
        Commands::Board(BoardCommand::List) => board::list(&services),
        Commands::Board(BoardCommand::Show(args)) => board::show(&services, args.id),
        Commands::Board(BoardCommand::Delete(args)) => board::delete(&services, args),
        Commands::Column(ColumnCommand::Show(args)) => column::show(&services, args),
        Commands::Card(CardCommand::Create(args)) => card::create(&services, args),
        Commands::Card(CardCommand::Move(args)) => card::move_next(&services, args),
        Commands::Card(CardCommand::Cancel(args)) => card::cancel(&services, args),
        Commands::Card(CardCommand::Block(args)) => card::block(&services, args),
        Commands::Card(CardCommand::Unblock(args)) => card::unblock(&services, args),
        Commands::Card(CardCommand::Show(args)) => card::show(&services, args.id),
        Commands::Stats(args) => stats::execute(&services, args.board),
        Commands::Menu | Commands::Migrate | Commands::Config(_) => Ok(()),
    }
}

/// Load the config file, apply `--db` and `--verbose`, and start logging.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.config).map_err(|e| {
        report_config_error(&cli.config, &e);
        e
    })?;

    if let Some(db) = &cli.db {
        config.database.url = db.display().to_string();
    }
    if cli.verbose > 0 {
        config.logging.verbose();
    }
    config.init_logging();
    Ok(config)
}

/// Show a parse failure with the offending region of the file.
fn report_config_error(path: &Path, err: &Error) {
    if output::is_json() {
        return;
    }
    if let Error::Config(ConfigError::Parse(parse)) = err {
        if let Some(rendered) = diagnostic::render_config_error(path, parse) {
            eprintln!("{rendered}");
        }
    }
}
