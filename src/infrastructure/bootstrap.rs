//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Opens the database named by the configuration, brings its schema up
//! to date and hands the stores to the application services.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::{
    create_pool_with_size, run_migrations, DbPool,
};
use crate::adapter::outbound::sqlite::{SqliteBoardStore, SqliteCardStore};
use crate::application::{BoardService, CardService, StatisticsService};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::{BoardStore, CardStore};

/// The application services, wired to one database.
pub struct Services {
    pub boards: BoardService,
    pub cards: CardService,
    pub statistics: StatisticsService,
}

impl Services {
    /// Wire services over an already migrated pool.
    #[must_use]
    pub fn from_pool(pool: DbPool) -> Self {
        let board_store: Arc<dyn BoardStore> = Arc::new(SqliteBoardStore::new(pool.clone()));
        let card_store: Arc<dyn CardStore> = Arc::new(SqliteCardStore::new(pool));
        Self {
            boards: BoardService::new(board_store),
            cards: CardService::new(Arc::clone(&card_store)),
            statistics: StatisticsService::new(card_store),
        }
    }
}

/// Open the configured database, creating its directory when needed.
///
/// # Errors
/// Returns an error if the directory cannot be created or the pool cannot
/// be opened.
pub fn open_pool(config: &Config) -> Result<DbPool> {
    let url = config.database.resolved_url();
    if !config.database.is_memory() {
        if let Some(parent) = Path::new(&url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    create_pool_with_size(&url, config.database.max_connections)
}

/// Open the database, apply pending migrations and wire the services.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn build_services(config: &Config) -> Result<Services> {
    let pool = open_pool(config)?;
    let applied = run_migrations(&pool)?;
    if applied > 0 {
        info!(applied, "database migrations applied");
    }
    Ok(Services::from_pool(pool))
}
