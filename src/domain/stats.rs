//! Statistics domain types.
//!
//! Pure aggregations over a board and the cards it holds.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::board::{Board, ColumnKind};
use super::card::Card;
use super::id::{BoardId, ColumnId};

/// Column layout counts for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStatistics {
    pub board_id: BoardId,
    pub total_columns: usize,
    pub initial_columns: usize,
    pub pending_columns: usize,
    pub final_columns: usize,
    pub cancel_columns: usize,
}

impl BoardStatistics {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            board_id: board.id,
            total_columns: board.columns.len(),
            initial_columns: board.count_kind(ColumnKind::Initial),
            pending_columns: board.count_kind(ColumnKind::Pending),
            final_columns: board.count_kind(ColumnKind::Final),
            cancel_columns: board.count_kind(ColumnKind::Cancel),
        }
    }
}

/// Per-column line of the column statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnStatistics {
    pub column_id: ColumnId,
    pub name: String,
    pub kind: ColumnKind,
    pub position: i32,
    pub cards: usize,
    pub blocked_cards: usize,
}

impl ColumnStatistics {
    /// One entry per board column, in board order.
    #[must_use]
    pub fn for_board(board: &Board, cards: &[Card]) -> Vec<Self> {
        board
            .columns
            .iter()
            .map(|column| {
                let in_column = cards.iter().filter(|c| c.column_id == column.id);
                let (count, blocked) = in_column.fold((0, 0), |(n, b), card| {
                    (n + 1, b + usize::from(card.is_blocked()))
                });
                Self {
                    column_id: column.id,
                    name: column.name.clone(),
                    kind: column.kind,
                    position: column.position,
                    cards: count,
                    blocked_cards: blocked,
                }
            })
            .collect()
    }
}

/// Flow summary for a board at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub board_id: BoardId,
    pub generated_at: DateTime<Utc>,
    pub total_cards: usize,
    pub active_cards: usize,
    pub finished_cards: usize,
    pub canceled_cards: usize,
    pub blocked_cards: usize,
    pub total_blocks: usize,
}

impl PerformanceReport {
    #[must_use]
    pub fn build(board: &Board, cards: &[Card], generated_at: DateTime<Utc>) -> Self {
        let kind_of = |card: &Card| board.column(card.column_id).map(|c| c.kind);
        let count_kind = |wanted: &[ColumnKind]| {
            cards
                .iter()
                .filter(|card| kind_of(card).is_some_and(|k| wanted.contains(&k)))
                .count()
        };

        Self {
            board_id: board.id,
            generated_at,
            total_cards: cards.len(),
            active_cards: count_kind(&[ColumnKind::Initial, ColumnKind::Pending]),
            finished_cards: count_kind(&[ColumnKind::Final]),
            canceled_cards: count_kind(&[ColumnKind::Cancel]),
            blocked_cards: cards.iter().filter(|c| c.is_blocked()).count(),
            total_blocks: cards.iter().map(Card::blocks_amount).sum(),
        }
    }

    /// Finished cards as a percentage of all cards.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.total_cards == 0 {
            return 0.0;
        }
        self.finished_cards as f64 / self.total_cards as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::BoardColumn;
    use crate::domain::card::Block;
    use crate::domain::id::{BlockId, CardId};

    fn board() -> Board {
        let kinds = [
            ColumnKind::Initial,
            ColumnKind::Pending,
            ColumnKind::Final,
            ColumnKind::Cancel,
        ];
        let columns = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| BoardColumn {
                id: ColumnId::new(i as i32 + 1),
                name: kind.label().to_string(),
                position: i as i32,
                kind: *kind,
                board_id: BoardId::new(9),
            })
            .collect();
        Board::new(BoardId::new(9), "Team", Utc::now(), columns)
    }

    fn card(id: i32, column: i32, blocks: Vec<Option<&str>>) -> Card {
        Card {
            id: CardId::new(id),
            title: format!("card {id}"),
            description: String::new(),
            column_id: ColumnId::new(column),
            created_at: Utc::now(),
            blocks: blocks
                .into_iter()
                .enumerate()
                .map(|(i, unblock)| Block {
                    id: BlockId::new(i as i32 + 1),
                    card_id: CardId::new(id),
                    block_reason: "waiting".into(),
                    blocked_at: Utc::now(),
                    unblock_reason: unblock.map(str::to_string),
                    unblocked_at: None,
                })
                .collect(),
        }
    }

    #[test]
    fn board_statistics_count_kinds() {
        let stats = BoardStatistics::from_board(&board());
        assert_eq!(stats.total_columns, 4);
        assert_eq!(stats.initial_columns, 1);
        assert_eq!(stats.pending_columns, 1);
        assert_eq!(stats.final_columns, 1);
        assert_eq!(stats.cancel_columns, 1);
    }

    #[test]
    fn column_statistics_follow_board_order() {
        let cards = vec![card(1, 1, vec![None]), card(2, 1, vec![]), card(3, 3, vec![])];
        let stats = ColumnStatistics::for_board(&board(), &cards);

        assert_eq!(stats.len(), 4);
        assert_eq!((stats[0].cards, stats[0].blocked_cards), (2, 1));
        assert_eq!(stats[1].cards, 0);
        assert_eq!(stats[2].cards, 1);
    }

    #[test]
    fn performance_report_counts_flow() {
        let cards = vec![
            card(1, 1, vec![Some("ok"), None]),
            card(2, 2, vec![]),
            card(3, 3, vec![Some("ok")]),
            card(4, 4, vec![]),
        ];
        let report = PerformanceReport::build(&board(), &cards, Utc::now());

        assert_eq!(report.total_cards, 4);
        assert_eq!(report.active_cards, 2);
        assert_eq!(report.finished_cards, 1);
        assert_eq!(report.canceled_cards, 1);
        assert_eq!(report.blocked_cards, 1);
        assert_eq!(report.total_blocks, 3);
        assert!((report.completion_rate() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_board_has_zero_completion() {
        let report = PerformanceReport::build(&board(), &[], Utc::now());
        assert_eq!(report.completion_rate(), 0.0);
    }
}
