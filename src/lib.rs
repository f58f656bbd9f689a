//! Boardctl - Kanban boards in the terminal.
//!
//! Boards are ordered columns (initial, pending, final, cancel) holding
//! cards that move forward one column at a time and can be blocked,
//! unblocked or canceled along the way. Everything is stored in SQLite.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Boards, cards, blocks, validation rules and statistics
//! - [`port`] - Store traits the application depends on
//! - [`application`] - Board, card and statistics services
//! - [`adapter`] - The CLI (inbound) and SQLite stores (outbound)
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose in-memory stores and sample layouts to integration tests
//!
//! # Example
//!
//! ```no_run
//! use boardctl::domain::{BoardDraft, CardDraft};
//! use boardctl::infrastructure::bootstrap::build_services;
//! use boardctl::infrastructure::config::settings::Config;
//!
//! fn main() -> boardctl::error::Result<()> {
//!     let services = build_services(&Config::load("config.toml")?)?;
//!     let draft = BoardDraft::new("Team", "Todo", &["Doing"], "Done", "Dropped")?;
//!     let board = services.boards.create(&draft)?;
//!     let card = services
//!         .cards
//!         .create(&board, &CardDraft::new("Write docs", "README first")?)?;
//!     services.cards.move_to_next_column(&board, card.id)?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
