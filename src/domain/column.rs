//! Column view with its cards.

use serde::Serialize;

use super::board::ColumnKind;
use super::card::CardSummary;
use super::id::ColumnId;

/// A column and the cards it currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnWithCards {
    pub id: ColumnId,
    pub name: String,
    pub kind: ColumnKind,
    pub cards: Vec<CardSummary>,
}
