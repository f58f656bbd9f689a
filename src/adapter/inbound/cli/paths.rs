//! Path utilities for boardctl.
//!
//! All data lives under `~/.boardctl/`:
//! - `~/.boardctl/config.toml` - main configuration
//! - `~/.boardctl/boardctl.db` - board database (see `[database] url`)

use std::path::PathBuf;

/// Returns the boardctl home directory (`~/.boardctl/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".boardctl")
}

/// Returns the default config file path (`~/.boardctl/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
