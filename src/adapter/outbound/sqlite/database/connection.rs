//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for SQLite databases.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of a [`DbPool`].
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Default number of pooled connections for file databases.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const MEMORY_URL: &str = ":memory:";

/// Applies pragmas to every connection handed out by the pool.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    create_pool_with_size(database_url, DEFAULT_MAX_CONNECTIONS)
}

/// Create a connection pool with an explicit size.
///
/// An in-memory database lives inside a single connection, so `:memory:`
/// always gets a pool of one connection that is never recycled.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool_with_size(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = DbPool::builder().connection_customizer(Box::new(SqlitePragmas));

    let builder = if database_url == MEMORY_URL {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(max_size.max(1))
    };

    debug!(database_url, "opening sqlite pool");
    builder
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Check a connection out of the pool.
///
/// # Errors
/// Returns [`Error::Connection`] if no connection becomes available.
pub fn checkout(pool: &DbPool) -> Result<DbConn> {
    pool.get().map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations, returning how many were applied.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<usize> {
    let mut conn = checkout(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    for version in &applied {
        debug!(%version, "applied migration");
    }
    Ok(applied.len())
}

/// Enable foreign keys (for cascading deletes) and wait on locked databases.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(conn)?;
    diesel::sql_query("PRAGMA busy_timeout = 5000").execute(conn)?;
    Ok(())
}
