//! Persistence ports for boards and cards.

use chrono::{DateTime, Utc};

use crate::domain::{
    Board, BoardDetails, BoardDraft, BoardId, BoardSummary, Card, CardId, ColumnId,
    ColumnWithCards,
};
use crate::error::Result;

/// A card to insert into a column.
#[derive(Debug, Clone)]
pub struct NewCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub column_id: ColumnId,
    pub created_at: DateTime<Utc>,
}

/// Storage operations for boards and their columns.
pub trait BoardStore: Send + Sync {
    /// Insert a board and all its columns atomically.
    fn insert(&self, draft: &BoardDraft, created_at: DateTime<Utc>) -> Result<Board>;

    /// Get a board with its columns.
    fn get(&self, id: BoardId) -> Result<Option<Board>>;

    /// List every board, oldest first.
    fn list(&self) -> Result<Vec<BoardSummary>>;

    /// Delete a board and everything in it. Returns false if absent.
    fn delete(&self, id: BoardId) -> Result<bool>;

    /// Board overview with card counts per column.
    fn details(&self, id: BoardId) -> Result<Option<BoardDetails>>;

    /// A column with the cards it holds.
    fn column_with_cards(&self, id: ColumnId) -> Result<Option<ColumnWithCards>>;
}

/// Storage operations for cards and their blocks.
pub trait CardStore: Send + Sync {
    /// Insert a card, returning it with its new id.
    fn insert(&self, card: &NewCard<'_>) -> Result<Card>;

    /// Get a card with its block history.
    fn get(&self, id: CardId) -> Result<Option<Card>>;

    /// Cards held by any of the given columns, with block history.
    fn list_in_columns(&self, columns: &[ColumnId]) -> Result<Vec<Card>>;

    /// Name of a column, if it exists.
    fn column_name(&self, column: ColumnId) -> Result<Option<String>>;

    /// Put a card in another column.
    fn move_to_column(&self, id: CardId, column: ColumnId) -> Result<()>;

    /// Open a new block on a card.
    fn block(&self, id: CardId, reason: &str, at: DateTime<Utc>) -> Result<()>;

    /// Close the active block of a card. Returns false if none was open.
    fn unblock(&self, id: CardId, reason: &str, at: DateTime<Utc>) -> Result<bool>;
}
