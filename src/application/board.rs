//! Board use-cases: create, look up, list, delete, inspect.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{
    Board, BoardDetails, BoardDraft, BoardId, BoardSummary, ColumnId, ColumnWithCards, DomainError,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::BoardStore;

/// Board management service.
pub struct BoardService {
    store: Arc<dyn BoardStore>,
}

impl BoardService {
    #[must_use]
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Persist a validated board layout.
    pub fn create(&self, draft: &BoardDraft) -> Result<Board> {
        let board = self.store.insert(draft, Utc::now())?;
        info!(board_id = %board.id, name = %board.name, columns = board.columns.len(), "board created");
        Ok(board)
    }

    pub fn find(&self, id: BoardId) -> Result<Option<Board>> {
        self.store.get(id)
    }

    /// Like [`find`](Self::find) but a missing board is an error.
    pub fn require(&self, id: BoardId) -> Result<Board> {
        self.store.get(id)?.ok_or(Error::BoardNotFound(id))
    }

    pub fn list(&self) -> Result<Vec<BoardSummary>> {
        self.store.list()
    }

    /// Delete a board with its columns, cards and blocks.
    ///
    /// Returns false when there was no such board.
    pub fn delete(&self, id: BoardId) -> Result<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            info!(board_id = %id, "board deleted");
        }
        Ok(deleted)
    }

    /// Board overview with per-column card counts.
    pub fn details(&self, id: BoardId) -> Result<Option<BoardDetails>> {
        self.store.details(id)
    }

    /// A column of `board` and its cards.
    ///
    /// # Errors
    /// [`DomainError::ColumnNotInBoard`] when the column belongs elsewhere.
    pub fn column(&self, board: &Board, column: ColumnId) -> Result<Option<ColumnWithCards>> {
        if !board.contains_column(column) {
            return Err(DomainError::ColumnNotInBoard(column).into());
        }
        self.store.column_with_cards(column)
    }
}
