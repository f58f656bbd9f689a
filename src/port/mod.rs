//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                          ┌─────────────┐
//! │   CLI   │                                          │   SQLite    │
//! │ Adapter │                                          │   Adapter   │
//! └─────────┘                                          └─────────────┘
//! ```
//!
//! - [`BoardStore`] - Persistence for boards and columns
//! - [`CardStore`] - Persistence for cards and blocks

pub mod outbound;

pub use outbound::store::{BoardStore, CardStore, NewCard};
