//! Application services (use cases).
//!
//! These services apply domain rules over the store ports and are what
//! the CLI drives.

pub mod board;
pub mod card;
pub mod statistics;

pub use board::BoardService;
pub use card::CardService;
pub use statistics::StatisticsService;
