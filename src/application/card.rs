//! Card workflow use-cases.
//!
//! Cards move one column at a time in board order. Blocked cards stay
//! put, finished cards never move again, and canceling jumps straight to
//! the board's cancel column.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{
    validation, Board, BoardColumn, Card, CardDetails, CardDraft, CardId, ColumnKind, DomainError,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::{CardStore, NewCard};

/// Card lifecycle service.
pub struct CardService {
    store: Arc<dyn CardStore>,
}

impl CardService {
    #[must_use]
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    fn require(&self, id: CardId) -> Result<Card> {
        self.store.get(id)?.ok_or(Error::CardNotFound(id))
    }

    /// Resolve the column holding `card`, which must be one of `board`'s.
    fn column_in<'b>(board: &'b Board, card: &Card) -> Result<&'b BoardColumn> {
        board
            .column(card.column_id)
            .ok_or_else(|| DomainError::CardInOtherBoard(card.id).into())
    }

    /// Create a card in the board's initial column.
    pub fn create(&self, board: &Board, draft: &CardDraft) -> Result<Card> {
        let initial = board.initial_column()?;
        let card = self.store.insert(&NewCard {
            title: &draft.title,
            description: &draft.description,
            column_id: initial.id,
            created_at: Utc::now(),
        })?;
        info!(card_id = %card.id, board_id = %board.id, "card created");
        Ok(card)
    }

    /// Move a card to the next column, returning that column.
    ///
    /// # Errors
    /// Fails when the card is missing, blocked, on another board, finished
    /// or canceled.
    pub fn move_to_next_column(&self, board: &Board, id: CardId) -> Result<BoardColumn> {
        let card = self.require(id)?;
        if card.is_blocked() {
            return Err(DomainError::CardBlocked(id).into());
        }
        let current = Self::column_in(board, &card)?;
        match current.kind {
            ColumnKind::Final => return Err(DomainError::CardFinished(id).into()),
            ColumnKind::Cancel => return Err(DomainError::CardCanceled(id).into()),
            ColumnKind::Initial | ColumnKind::Pending => {}
        }

        let next = board
            .next_column(current)
            .ok_or(DomainError::MissingColumn {
                kind: ColumnKind::Final,
            })?;
        self.store.move_to_column(id, next.id)?;
        info!(card_id = %id, from = %current.name, to = %next.name, "card moved");
        Ok(next.clone())
    }

    /// Move a card to the board's cancel column, returning that column.
    pub fn cancel(&self, board: &Board, id: CardId) -> Result<BoardColumn> {
        let card = self.require(id)?;
        if card.is_blocked() {
            return Err(DomainError::CardBlocked(id).into());
        }
        let current = Self::column_in(board, &card)?;
        match current.kind {
            ColumnKind::Final => return Err(DomainError::CardFinished(id).into()),
            ColumnKind::Cancel => return Err(DomainError::CardCanceled(id).into()),
            ColumnKind::Initial | ColumnKind::Pending => {}
        }

        let cancel = board.cancel_column()?;
        self.store.move_to_column(id, cancel.id)?;
        info!(card_id = %id, "card canceled");
        Ok(cancel.clone())
    }

    /// Block a card with a reason.
    pub fn block(&self, board: &Board, id: CardId, reason: &str) -> Result<()> {
        let reason = validation::non_empty("block reason", reason)?;
        let card = self.require(id)?;
        if card.is_blocked() {
            return Err(DomainError::CardAlreadyBlocked(id).into());
        }
        let current = Self::column_in(board, &card)?;
        if current.kind.is_terminal() {
            return Err(DomainError::CannotBlockInColumn {
                card: id,
                kind: current.kind,
            }
            .into());
        }

        self.store.block(id, &reason, Utc::now())?;
        info!(card_id = %id, reason = %reason, "card blocked");
        Ok(())
    }

    /// Close a card's active block with a reason.
    pub fn unblock(&self, id: CardId, reason: &str) -> Result<()> {
        let reason = validation::non_empty("unblock reason", reason)?;
        let card = self.require(id)?;
        if !card.is_blocked() {
            return Err(DomainError::CardNotBlocked(id).into());
        }

        if !self.store.unblock(id, &reason, Utc::now())? {
            return Err(DomainError::CardNotBlocked(id).into());
        }
        info!(card_id = %id, reason = %reason, "card unblocked");
        Ok(())
    }

    /// Full card view, or `None` when the card does not exist.
    pub fn details(&self, id: CardId) -> Result<Option<CardDetails>> {
        let Some(card) = self.store.get(id)? else {
            return Ok(None);
        };
        let column_name = self.store.column_name(card.column_id)?.unwrap_or_default();
        Ok(Some(CardDetails::from_card(&card, column_name)))
    }

    /// Every card on a board, with block history.
    pub fn cards_on(&self, board: &Board) -> Result<Vec<Card>> {
        let columns: Vec<_> = board.columns.iter().map(|c| c.id).collect();
        self.store.list_in_columns(&columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::board::BoardService;
    use crate::testkit::store::{memory_stores, sample_draft};

    struct Fixture {
        boards: BoardService,
        cards: CardService,
        board: Board,
    }

    fn fixture() -> Fixture {
        let (board_store, card_store) = memory_stores();
        let boards = BoardService::new(board_store);
        let board = boards.create(&sample_draft()).unwrap();
        Fixture {
            boards,
            cards: CardService::new(card_store),
            board,
        }
    }

    fn new_card(f: &Fixture) -> Card {
        let draft = CardDraft::new("Login page", "Build the login form").unwrap();
        f.cards.create(&f.board, &draft).unwrap()
    }

    fn domain_err(err: Error) -> DomainError {
        match err {
            Error::Domain(e) => e,
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn new_cards_start_in_initial_column() {
        let f = fixture();
        let card = new_card(&f);
        assert_eq!(card.column_id, f.board.initial_column().unwrap().id);
    }

    #[test]
    fn card_walks_board_to_final_column() {
        let f = fixture();
        let card = new_card(&f);

        let doing = f.cards.move_to_next_column(&f.board, card.id).unwrap();
        assert_eq!(doing.name, "Doing");
        let done = f.cards.move_to_next_column(&f.board, card.id).unwrap();
        assert_eq!(done.kind, ColumnKind::Final);

        let err = f.cards.move_to_next_column(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardFinished(card.id));
    }

    #[test]
    fn missing_card_is_reported() {
        let f = fixture();
        let err = f
            .cards
            .move_to_next_column(&f.board, CardId::new(31))
            .unwrap_err();
        assert!(matches!(err, Error::CardNotFound(id) if id == CardId::new(31)));
    }

    #[test]
    fn blocked_card_cannot_move_or_cancel() {
        let f = fixture();
        let card = new_card(&f);
        f.cards.block(&f.board, card.id, "waiting on design").unwrap();

        let err = f.cards.move_to_next_column(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardBlocked(card.id));
        let err = f.cards.cancel(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardBlocked(card.id));

        f.cards.unblock(card.id, "design ready").unwrap();
        assert!(f.cards.move_to_next_column(&f.board, card.id).is_ok());
    }

    #[test]
    fn block_twice_and_unblock_free_card_fail() {
        let f = fixture();
        let card = new_card(&f);

        let err = f.cards.unblock(card.id, "nothing").unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardNotBlocked(card.id));

        f.cards.block(&f.board, card.id, "first").unwrap();
        let err = f.cards.block(&f.board, card.id, "second").unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardAlreadyBlocked(card.id));
    }

    #[test]
    fn block_requires_reason() {
        let f = fixture();
        let card = new_card(&f);

        let err = f.cards.block(&f.board, card.id, "   ").unwrap_err();
        assert_eq!(
            domain_err(err),
            DomainError::EmptyField {
                field: "block reason"
            }
        );
    }

    #[test]
    fn terminal_cards_cannot_be_blocked() {
        let f = fixture();
        let card = new_card(&f);
        f.cards.cancel(&f.board, card.id).unwrap();

        let err = f.cards.block(&f.board, card.id, "late").unwrap_err();
        assert_eq!(
            domain_err(err),
            DomainError::CannotBlockInColumn {
                card: card.id,
                kind: ColumnKind::Cancel
            }
        );
    }

    #[test]
    fn cancel_moves_to_cancel_column_once() {
        let f = fixture();
        let card = new_card(&f);

        let column = f.cards.cancel(&f.board, card.id).unwrap();
        assert_eq!(column.kind, ColumnKind::Cancel);

        let err = f.cards.cancel(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardCanceled(card.id));
        let err = f.cards.move_to_next_column(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardCanceled(card.id));
    }

    #[test]
    fn finished_card_cannot_be_canceled() {
        let f = fixture();
        let card = new_card(&f);
        f.cards.move_to_next_column(&f.board, card.id).unwrap();
        f.cards.move_to_next_column(&f.board, card.id).unwrap();

        let err = f.cards.cancel(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardFinished(card.id));
    }

    #[test]
    fn card_from_another_board_is_rejected() {
        let f = fixture();
        let other = f.boards.create(&sample_draft()).unwrap();
        let draft = CardDraft::new("Elsewhere", "lives on the other board").unwrap();
        let card = f.cards.create(&other, &draft).unwrap();

        let err = f.cards.move_to_next_column(&f.board, card.id).unwrap_err();
        assert_eq!(domain_err(err), DomainError::CardInOtherBoard(card.id));
    }

    #[test]
    fn details_report_block_state() {
        let f = fixture();
        let card = new_card(&f);
        f.cards.block(&f.board, card.id, "flaky CI").unwrap();

        let details = f.cards.details(card.id).unwrap().unwrap();
        assert!(details.blocked);
        assert_eq!(details.block_reason.as_deref(), Some("flaky CI"));
        assert_eq!(details.blocks_amount, 1);
        assert_eq!(details.column_name, "Todo");
        assert!(f.cards.details(CardId::new(500)).unwrap().is_none());
    }
}
