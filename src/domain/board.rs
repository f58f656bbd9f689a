//! Boards and their ordered columns.
//!
//! A board always has the layout
//! `Initial(0) -> Pending(1..=n) -> Final(n+1) -> Cancel(n+2)`.
//! [`BoardDraft`] is the only way to build that layout before it is
//! persisted, so stored boards inherit the invariant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{BoardId, ColumnId};
use super::validation;

/// Role of a column inside a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnKind {
    /// Where new cards are created.
    Initial,
    /// Intermediate work-in-progress steps.
    Pending,
    /// Finished cards.
    Final,
    /// Canceled cards.
    Cancel,
}

impl ColumnKind {
    /// All kinds in board order.
    pub const ALL: [ColumnKind; 4] = [Self::Initial, Self::Pending, Self::Final, Self::Cancel];

    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Pending => "PENDING",
            Self::Final => "FINAL",
            Self::Cancel => "CANCEL",
        }
    }

    /// Human-friendly label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Pending => "pending",
            Self::Final => "final",
            Self::Cancel => "cancel",
        }
    }

    /// True for columns a card cannot leave by moving forward.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Final | Self::Cancel)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INITIAL" => Ok(Self::Initial),
            "PENDING" => Ok(Self::Pending),
            "FINAL" => Ok(Self::Final),
            "CANCEL" => Ok(Self::Cancel),
            other => Err(format!("unknown column kind '{other}'")),
        }
    }
}

/// A persisted board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub id: ColumnId,
    pub name: String,
    pub position: i32,
    pub kind: ColumnKind,
    pub board_id: BoardId,
}

/// A persisted board with its columns sorted by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub columns: Vec<BoardColumn>,
}

impl Board {
    /// Build a board, sorting columns by position.
    #[must_use]
    pub fn new(
        id: BoardId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        mut columns: Vec<BoardColumn>,
    ) -> Self {
        columns.sort_by_key(|c| c.position);
        Self {
            id,
            name: name.into(),
            created_at,
            columns,
        }
    }

    fn first_of(&self, kind: ColumnKind) -> Result<&BoardColumn, DomainError> {
        self.columns
            .iter()
            .find(|c| c.kind == kind)
            .ok_or(DomainError::MissingColumn { kind })
    }

    /// Column where new cards land.
    pub fn initial_column(&self) -> Result<&BoardColumn, DomainError> {
        self.first_of(ColumnKind::Initial)
    }

    /// Column of finished cards.
    pub fn final_column(&self) -> Result<&BoardColumn, DomainError> {
        self.first_of(ColumnKind::Final)
    }

    /// Column of canceled cards.
    pub fn cancel_column(&self) -> Result<&BoardColumn, DomainError> {
        self.first_of(ColumnKind::Cancel)
    }

    /// Look up a column of this board.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains_column(&self, id: ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// The column right after `current` in board order.
    #[must_use]
    pub fn next_column(&self, current: &BoardColumn) -> Option<&BoardColumn> {
        self.columns
            .iter()
            .find(|c| c.position == current.position + 1)
    }

    /// Number of columns of a given kind.
    #[must_use]
    pub fn count_kind(&self, kind: ColumnKind) -> usize {
        self.columns.iter().filter(|c| c.kind == kind).count()
    }
}

/// Lightweight listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A column that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDraft {
    pub name: String,
    pub position: i32,
    pub kind: ColumnKind,
}

/// A validated board that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDraft {
    pub name: String,
    pub columns: Vec<ColumnDraft>,
}

impl BoardDraft {
    /// Validate names and lay out the columns.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidName`] or [`DomainError::EmptyField`]
    /// when any name breaks the name rule, and [`DomainError::TooLarge`]
    /// for more than [`validation::MAX_COUNT`] pending columns.
    pub fn new<S: AsRef<str>>(
        name: &str,
        initial: &str,
        pending: &[S],
        final_name: &str,
        cancel: &str,
    ) -> Result<Self, DomainError> {
        let name = validation::name("board name", name)?;
        if pending.len() > validation::MAX_COUNT {
            return Err(DomainError::TooLarge {
                field: "pending columns",
                max: validation::MAX_COUNT,
            });
        }

        let mut columns = Vec::with_capacity(pending.len() + 3);
        columns.push(ColumnDraft {
            name: validation::name("initial column name", initial)?,
            position: 0,
            kind: ColumnKind::Initial,
        });
        for (offset, pending_name) in pending.iter().enumerate() {
            columns.push(ColumnDraft {
                name: validation::name("pending column name", pending_name.as_ref())?,
                position: position(offset + 1),
                kind: ColumnKind::Pending,
            });
        }
        columns.push(ColumnDraft {
            name: validation::name("final column name", final_name)?,
            position: position(pending.len() + 1),
            kind: ColumnKind::Final,
        });
        columns.push(ColumnDraft {
            name: validation::name("cancel column name", cancel)?,
            position: position(pending.len() + 2),
            kind: ColumnKind::Cancel,
        });

        Ok(Self { name, columns })
    }
}

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Per-column card count for the board overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnOverview {
    pub id: ColumnId,
    pub name: String,
    pub kind: ColumnKind,
    pub position: i32,
    pub cards_amount: i64,
}

/// Board overview with card counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardDetails {
    pub id: BoardId,
    pub name: String,
    pub columns: Vec<ColumnOverview>,
}

impl BoardDetails {
    /// Total cards across every column.
    #[must_use]
    pub fn total_cards(&self) -> i64 {
        self.columns.iter().map(|c| c.cards_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(draft: &BoardDraft) -> Board {
        let columns = draft
            .columns
            .iter()
            .enumerate()
            .rev()
            .map(|(i, c)| BoardColumn {
                id: ColumnId::new(i as i32 + 10),
                name: c.name.clone(),
                position: c.position,
                kind: c.kind,
                board_id: BoardId::new(1),
            })
            .collect();
        Board::new(BoardId::new(1), draft.name.clone(), Utc::now(), columns)
    }

    #[test]
    fn draft_lays_out_columns_in_order() {
        let draft = BoardDraft::new("Sprint", "Todo", &["Doing", "Review"], "Done", "Dropped")
            .unwrap();

        let layout: Vec<_> = draft.columns.iter().map(|c| (c.position, c.kind)).collect();
        assert_eq!(
            layout,
            vec![
                (0, ColumnKind::Initial),
                (1, ColumnKind::Pending),
                (2, ColumnKind::Pending),
                (3, ColumnKind::Final),
                (4, ColumnKind::Cancel),
            ]
        );
    }

    #[test]
    fn draft_without_pending_columns() {
        let draft = BoardDraft::new("Home", "Todo", &[] as &[&str], "Done", "Dropped").unwrap();
        assert_eq!(draft.columns.len(), 3);
        assert_eq!(draft.columns[1].kind, ColumnKind::Final);
        assert_eq!(draft.columns[1].position, 1);
        assert_eq!(draft.columns[2].position, 2);
    }

    #[test]
    fn draft_rejects_invalid_column_name() {
        let err = BoardDraft::new("Sprint", "Todo", &["Step 2"], "Done", "Dropped").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidName {
                field: "pending column name"
            }
        );
    }

    #[test]
    fn draft_caps_pending_columns() {
        let pending = vec!["Step"; validation::MAX_COUNT + 1];
        let err = BoardDraft::new("Sprint", "Todo", &pending, "Done", "Dropped").unwrap_err();
        assert_eq!(
            err,
            DomainError::TooLarge {
                field: "pending columns",
                max: validation::MAX_COUNT
            }
        );
    }

    #[test]
    fn board_sorts_columns_and_finds_roles() {
        let draft = BoardDraft::new("Sprint", "Todo", &["Doing"], "Done", "Dropped").unwrap();
        let board = stored(&draft);

        let positions: Vec<_> = board.columns.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(board.initial_column().unwrap().name, "Todo");
        assert_eq!(board.final_column().unwrap().name, "Done");
        assert_eq!(board.cancel_column().unwrap().name, "Dropped");
    }

    #[test]
    fn next_column_follows_position() {
        let draft = BoardDraft::new("Sprint", "Todo", &["Doing"], "Done", "Dropped").unwrap();
        let board = stored(&draft);

        let initial = board.initial_column().unwrap();
        let next = board.next_column(initial).unwrap();
        assert_eq!(next.name, "Doing");

        let cancel = board.cancel_column().unwrap();
        assert!(board.next_column(cancel).is_none());
    }

    #[test]
    fn missing_column_kind_is_reported() {
        let board = Board::new(BoardId::new(1), "Empty", Utc::now(), vec![]);
        assert_eq!(
            board.initial_column().unwrap_err(),
            DomainError::MissingColumn {
                kind: ColumnKind::Initial
            }
        );
    }

    #[test]
    fn column_kind_round_trips_storage_form() {
        for kind in ColumnKind::ALL {
            assert_eq!(kind.as_str().parse::<ColumnKind>().unwrap(), kind);
        }
        assert!("DONE".parse::<ColumnKind>().is_err());
    }
}
