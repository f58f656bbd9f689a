use clap::Parser;

use boardctl::adapter::inbound::cli::command::Cli;
use boardctl::adapter::inbound::cli::{output, run};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = run::execute(&cli) {
        tracing::debug!(error = %e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
