//! Cards and their block history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::DomainError;
use super::id::{BlockId, CardId, ColumnId};
use super::validation;

/// One blocking episode of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub id: BlockId,
    pub card_id: CardId,
    pub block_reason: String,
    pub blocked_at: DateTime<Utc>,
    pub unblock_reason: Option<String>,
    pub unblocked_at: Option<DateTime<Utc>>,
}

impl Block {
    /// A block is active until it receives an unblock reason.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.unblock_reason.is_none()
    }
}

/// A persisted card with its block history (oldest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub column_id: ColumnId,
    pub created_at: DateTime<Utc>,
    pub blocks: Vec<Block>,
}

impl Card {
    /// The currently open block, if any.
    #[must_use]
    pub fn active_block(&self) -> Option<&Block> {
        self.blocks.iter().rev().find(|b| b.is_active())
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.active_block().is_some()
    }

    /// How many times the card has been blocked.
    #[must_use]
    pub fn blocks_amount(&self) -> usize {
        self.blocks.len()
    }
}

/// A validated card that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    /// Set when the description was cut to the maximum length.
    pub truncated: bool,
}

impl CardDraft {
    /// Validate title and description.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyField`] when either value is blank.
    pub fn new(title: &str, description: &str) -> Result<Self, DomainError> {
        let title = validation::non_empty("title", title)?;
        let description = validation::description(description)?;
        Ok(Self {
            title,
            description: description.text,
            truncated: description.truncated,
        })
    }
}

/// Card summary shown inside a column view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub id: CardId,
    pub title: String,
    pub description: String,
}

/// Full card view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDetails {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub blocked: bool,
    pub block_reason: Option<String>,
    pub blocks_amount: usize,
    pub created_at: DateTime<Utc>,
    pub column_id: ColumnId,
    pub column_name: String,
}

impl CardDetails {
    /// Combine a card with the name of the column holding it.
    #[must_use]
    pub fn from_card(card: &Card, column_name: impl Into<String>) -> Self {
        let active = card.active_block();
        Self {
            id: card.id,
            title: card.title.clone(),
            description: card.description.clone(),
            blocked: active.is_some(),
            block_reason: active.map(|b| b.block_reason.clone()),
            blocks_amount: card.blocks_amount(),
            created_at: card.created_at,
            column_id: card.column_id,
            column_name: column_name.into(),
        }
    }
}
