//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - In-memory SQLite stores and sample board layouts.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod store;
