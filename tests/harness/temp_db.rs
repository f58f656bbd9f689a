#![allow(dead_code)]

use std::path::{Path, PathBuf};

use boardctl::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use boardctl::infrastructure::bootstrap::Services;
use tempfile::TempDir;

/// Temporary SQLite database file for integration tests.
///
/// The directory (and the database in it) is removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("boardctl-{name}.db"));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A config path inside the temp dir that does not exist.
    pub fn missing_config(&self) -> PathBuf {
        self.dir.path().join("absent.toml")
    }

    /// Open a migrated pool on the database file.
    pub fn pool(&self) -> DbPool {
        let pool = create_pool(&self.path.display().to_string()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        pool
    }

    pub fn services(&self) -> Services {
        Services::from_pool(self.pool())
    }
}
