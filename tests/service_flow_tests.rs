//! Service flows against a file-backed database.

mod harness;

use boardctl::domain::{BoardDraft, CardDraft, ColumnKind, DomainError};
use boardctl::error::Error;
use boardctl::testkit::store::sample_draft;

use harness::temp_db::TempDb;

#[test]
fn boards_survive_reopening_the_database() {
    let db = TempDb::create("reopen");
    let board = db.services().boards.create(&sample_draft()).unwrap();

    let services = db.services();
    let reloaded = services.boards.require(board.id).unwrap();
    assert_eq!(reloaded.name, "Sprint");
    assert_eq!(reloaded.columns.len(), 4);
    assert_eq!(services.boards.list().unwrap().len(), 1);
}

#[test]
fn card_lifecycle_updates_statistics() {
    let db = TempDb::create("lifecycle");
    let services = db.services();
    let board = services.boards.create(&sample_draft()).unwrap();

    let draft = CardDraft::new("Write docs", "Explain the menu").unwrap();
    let done = services.cards.create(&board, &draft).unwrap();
    let dropped = services.cards.create(&board, &draft).unwrap();
    let stuck = services.cards.create(&board, &draft).unwrap();

    services.cards.move_to_next_column(&board, done.id).unwrap();
    let last = services.cards.move_to_next_column(&board, done.id).unwrap();
    assert_eq!(last.kind, ColumnKind::Final);

    services.cards.cancel(&board, dropped.id).unwrap();
    services.cards.block(&board, stuck.id, "waiting on review").unwrap();

    let report = services.statistics.performance_report(&board).unwrap();
    assert_eq!(report.total_cards, 3);
    assert_eq!(report.finished_cards, 1);
    assert_eq!(report.canceled_cards, 1);
    assert_eq!(report.active_cards, 1);
    assert_eq!(report.blocked_cards, 1);
    assert_eq!(report.total_blocks, 1);

    let details = services.boards.details(board.id).unwrap().unwrap();
    assert_eq!(details.total_cards(), 3);
}

#[test]
fn block_history_is_kept_across_unblocks() {
    let db = TempDb::create("history");
    let services = db.services();
    let board = services.boards.create(&sample_draft()).unwrap();
    let card = services
        .cards
        .create(&board, &CardDraft::new("Deploy", "Ship the release").unwrap())
        .unwrap();

    for round in 0..2 {
        services.cards.block(&board, card.id, &format!("round {round}")).unwrap();
        services.cards.unblock(card.id, "resolved").unwrap();
    }

    let details = services.cards.details(card.id).unwrap().unwrap();
    assert_eq!(details.blocks_amount, 2);
    assert!(!details.blocked);
    assert_eq!(details.block_reason, None);
}

#[test]
fn deleting_a_board_removes_its_cards() {
    let db = TempDb::create("cascade");
    let services = db.services();
    let board = services.boards.create(&sample_draft()).unwrap();
    let card = services
        .cards
        .create(&board, &CardDraft::new("Cleanup", "old card").unwrap())
        .unwrap();
    services.cards.block(&board, card.id, "stale").unwrap();

    assert!(services.boards.delete(board.id).unwrap());
    assert!(services.cards.details(card.id).unwrap().is_none());
    assert!(matches!(
        services.boards.require(board.id),
        Err(Error::BoardNotFound(_))
    ));
}

#[test]
fn cards_cannot_cross_boards() {
    let db = TempDb::create("cross");
    let services = db.services();
    let first = services.boards.create(&sample_draft()).unwrap();
    let other = services
        .boards
        .create(&BoardDraft::new("Backlog", "New", &["Review"], "Shipped", "Dropped").unwrap())
        .unwrap();
    let card = services
        .cards
        .create(&first, &CardDraft::new("Triage", "Sort incoming work").unwrap())
        .unwrap();

    assert!(matches!(
        services.cards.move_to_next_column(&other, card.id),
        Err(Error::Domain(DomainError::CardInOtherBoard(_)))
    ));
}
