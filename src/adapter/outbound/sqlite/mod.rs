//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the board and card stores
//! using Diesel ORM.

pub mod board_store;
pub mod card_store;
mod convert;
pub mod database;

pub use board_store::SqliteBoardStore;
pub use card_store::SqliteCardStore;
