//! Storage-agnostic domain logic: boards, columns, cards and their rules.

pub mod board;
pub mod card;
pub mod column;
pub mod error;
pub mod id;
pub mod stats;
pub mod validation;

pub use board::{
    Board, BoardColumn, BoardDetails, BoardDraft, BoardSummary, ColumnDraft, ColumnKind,
    ColumnOverview,
};
pub use card::{Block, Card, CardDetails, CardDraft, CardSummary};
pub use column::ColumnWithCards;
pub use error::DomainError;
pub use id::{BlockId, BoardId, CardId, ColumnId};
pub use stats::{BoardStatistics, ColumnStatistics, PerformanceReport};
