use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use boardctl::error::{ConfigError, Error};
use boardctl::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("boardctl-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_rejects_zero_connections() {
    let toml = r#"
[database]
url = "boards.db"
max_connections = 0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "database.max_connections",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid max_connections error, got {err}"),
        Ok(_) => panic!("Expected invalid max_connections error, got Ok"),
    }
}

#[test]
fn config_rejects_unknown_log_format() {
    let toml = r#"
[logging]
level = "info"
format = "xml"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        }))
    ));
}

#[test]
fn config_reports_parse_errors() {
    let path = write_temp_config("[database\nurl = 3\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn config_sections_are_optional() {
    let toml = r#"
[logging]
format = "json"
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).expect("load config");
    let _ = fs::remove_file(&path);

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.database.max_connections, 5);
}
