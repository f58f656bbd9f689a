//! In-memory stores for service tests.

use std::sync::Arc;

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::{SqliteBoardStore, SqliteCardStore};
use crate::domain::BoardDraft;
use crate::port::outbound::store::{BoardStore, CardStore};

/// Board and card stores sharing one migrated in-memory database.
///
/// # Panics
/// Panics if the in-memory database cannot be created or migrated.
pub fn memory_stores() -> (Arc<dyn BoardStore>, Arc<dyn CardStore>) {
    let pool = create_pool(":memory:").expect("in-memory pool");
    run_migrations(&pool).expect("migrations");
    (
        Arc::new(SqliteBoardStore::new(pool.clone())),
        Arc::new(SqliteCardStore::new(pool)),
    )
}

/// `Sprint` board: Todo, Doing, Done and Dropped.
///
/// # Panics
/// Panics if the fixed names stop passing validation.
pub fn sample_draft() -> BoardDraft {
    BoardDraft::new("Sprint", "Todo", &["Doing"], "Done", "Dropped").expect("valid sample board")
}
