//! Handler for the `migrate` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::sqlite::database::connection::run_migrations;
use crate::error::Result;
use crate::infrastructure::bootstrap::open_pool;
use crate::infrastructure::config::settings::Config;

/// Execute `migrate`.
pub fn execute(config: &Config) -> Result<()> {
    let url = config.database.resolved_url();
    let spinner = output::spinner("Applying migrations...");

    let applied = match open_pool(config).and_then(|pool| run_migrations(&pool)) {
        Ok(applied) => applied,
        Err(e) => {
            output::spinner_fail(&spinner, "Migration failed");
            return Err(e);
        }
    };

    if output::is_json() {
        spinner.finish_and_clear();
        output::json_output(json!({
            "command": "migrate",
            "database_url": url,
            "applied": applied,
        }));
        return Ok(());
    }

    let message = match applied {
        0 => "Database is up to date".to_string(),
        1 => "Applied 1 migration".to_string(),
        n => format!("Applied {n} migrations"),
    };
    output::spinner_success(&spinner, &message);
    output::field("Database", url);
    Ok(())
}
