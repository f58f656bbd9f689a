//! Canonical test configurations.

use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::{Config, DatabaseConfig};

/// Config pointing at `url` with quiet logging.
pub fn with_database(url: &str) -> Config {
    Config {
        database: DatabaseConfig {
            url: url.to_string(),
            max_connections: 2,
        },
        logging: LoggingConfig {
            level: "off".into(),
            format: "pretty".into(),
        },
    }
}
