//! Board statistics use-cases.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::{Board, BoardStatistics, Card, ColumnStatistics, PerformanceReport};
use crate::error::Result;
use crate::port::outbound::store::CardStore;

/// Aggregates layout and card flow figures for a board.
pub struct StatisticsService {
    cards: Arc<dyn CardStore>,
}

impl StatisticsService {
    #[must_use]
    pub fn new(cards: Arc<dyn CardStore>) -> Self {
        Self { cards }
    }

    /// Column layout counts. Needs no card data.
    #[must_use]
    pub fn board_statistics(&self, board: &Board) -> BoardStatistics {
        BoardStatistics::from_board(board)
    }

    /// Card and blocked-card counts per column, in board order.
    pub fn column_statistics(&self, board: &Board) -> Result<Vec<ColumnStatistics>> {
        let cards = self.load_cards(board)?;
        Ok(ColumnStatistics::for_board(board, &cards))
    }

    /// Flow summary stamped with the current time.
    pub fn performance_report(&self, board: &Board) -> Result<PerformanceReport> {
        let cards = self.load_cards(board)?;
        let report = PerformanceReport::build(board, &cards, Utc::now());
        debug!(
            board_id = %board.id,
            total = report.total_cards,
            finished = report.finished_cards,
            "performance report built"
        );
        Ok(report)
    }

    fn load_cards(&self, board: &Board) -> Result<Vec<Card>> {
        let columns: Vec<_> = board.columns.iter().map(|c| c.id).collect();
        self.cards.list_in_columns(&columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::board::BoardService;
    use crate::application::card::CardService;
    use crate::domain::CardDraft;
    use crate::testkit::store::{memory_stores, sample_draft};

    #[test]
    fn statistics_follow_card_flow() {
        let (board_store, card_store) = memory_stores();
        let board = BoardService::new(board_store)
            .create(&sample_draft())
            .unwrap();
        let cards = CardService::new(card_store.clone());
        let stats = StatisticsService::new(card_store);

        let draft = CardDraft::new("Task", "something to do").unwrap();
        let done = cards.create(&board, &draft).unwrap();
        let dropped = cards.create(&board, &draft).unwrap();
        let stuck = cards.create(&board, &draft).unwrap();
        cards.move_to_next_column(&board, done.id).unwrap();
        cards.move_to_next_column(&board, done.id).unwrap();
        cards.cancel(&board, dropped.id).unwrap();
        cards.block(&board, stuck.id, "needs input").unwrap();

        let layout = stats.board_statistics(&board);
        assert_eq!(layout.total_columns, 4);
        assert_eq!(layout.pending_columns, 1);

        let columns = stats.column_statistics(&board).unwrap();
        let counts: Vec<_> = columns.iter().map(|c| (c.cards, c.blocked_cards)).collect();
        assert_eq!(counts, vec![(1, 1), (0, 0), (1, 0), (1, 0)]);

        let report = stats.performance_report(&board).unwrap();
        assert_eq!(report.total_cards, 3);
        assert_eq!(report.active_cards, 1);
        assert_eq!(report.finished_cards, 1);
        assert_eq!(report.canceled_cards, 1);
        assert_eq!(report.blocked_cards, 1);
        assert_eq!(report.total_blocks, 1);
    }

    #[test]
    fn empty_board_reports_zero_completion() {
        let (board_store, card_store) = memory_stores();
        let board = BoardService::new(board_store)
            .create(&sample_draft())
            .unwrap();

        let report = StatisticsService::new(card_store)
            .performance_report(&board)
            .unwrap();
        assert_eq!(report.total_cards, 0);
        assert!(report.completion_rate().abs() < f64::EPSILON);
    }
}
