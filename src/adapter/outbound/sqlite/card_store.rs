//! SQLite card store implementation.
//!
//! Cards and their block history. A card's blocks are always loaded with
//! it, so the domain can tell whether it is blocked.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::debug;

use super::convert::{block_from_row, card_from_row};
use super::database::connection::{checkout, DbConn, DbPool};
use super::database::model::{BlockRow, CardRow, NewBlockRow, NewCardRow};
use super::database::schema::{blocks, boards_columns, cards};
use crate::domain::{Block, Card, CardId, ColumnId};
use crate::error::Result;
use crate::port::outbound::store::{CardStore, NewCard};

/// SQLite-backed card store.
pub struct SqliteCardStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCardStore {
    /// Create a new SQLite card store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn load_blocks(conn: &mut DbConn, card_ids: &[i32]) -> Result<HashMap<i32, Vec<Block>>> {
        let rows: Vec<BlockRow> = blocks::table
            .filter(blocks::card_id.eq_any(card_ids))
            .order(blocks::id.asc())
            .select(BlockRow::as_select())
            .load(conn)?;

        let mut by_card: HashMap<i32, Vec<Block>> = HashMap::new();
        for row in rows {
            let card_id = row.card_id;
            by_card.entry(card_id).or_default().push(block_from_row(row)?);
        }
        Ok(by_card)
    }
}

impl CardStore for SqliteCardStore {
    fn insert(&self, card: &NewCard<'_>) -> Result<Card> {
        let mut conn = checkout(&self.pool)?;

        let row: CardRow = diesel::insert_into(cards::table)
            .values(&NewCardRow {
                title: card.title,
                description: card.description,
                board_column_id: card.column_id.value(),
                created_at: card.created_at.to_rfc3339(),
            })
            .returning(CardRow::as_returning())
            .get_result(&mut conn)?;

        debug!(card_id = row.id, column_id = row.board_column_id, "inserted card");
        card_from_row(row, Vec::new())
    }

    fn get(&self, id: CardId) -> Result<Option<Card>> {
        let mut conn = checkout(&self.pool)?;

        let row: Option<CardRow> = cards::table
            .find(id.value())
            .select(CardRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let blocks = Self::load_blocks(&mut conn, &[row.id])?
            .remove(&row.id)
            .unwrap_or_default();
        card_from_row(row, blocks).map(Some)
    }

    fn list_in_columns(&self, columns: &[ColumnId]) -> Result<Vec<Card>> {
        let mut conn = checkout(&self.pool)?;
        let column_ids: Vec<i32> = columns.iter().map(|c| c.value()).collect();

        let rows: Vec<CardRow> = cards::table
            .filter(cards::board_column_id.eq_any(&column_ids))
            .order(cards::id.asc())
            .select(CardRow::as_select())
            .load(&mut conn)?;

        let card_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut blocks = Self::load_blocks(&mut conn, &card_ids)?;

        rows.into_iter()
            .map(|row| {
                let history = blocks.remove(&row.id).unwrap_or_default();
                card_from_row(row, history)
            })
            .collect()
    }

    fn column_name(&self, column: ColumnId) -> Result<Option<String>> {
        let mut conn = checkout(&self.pool)?;

        let name = boards_columns::table
            .find(column.value())
            .select(boards_columns::name)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(name)
    }

    fn move_to_column(&self, id: CardId, column: ColumnId) -> Result<()> {
        let mut conn = checkout(&self.pool)?;

        diesel::update(cards::table.find(id.value()))
            .set(cards::board_column_id.eq(column.value()))
            .execute(&mut conn)?;

        Ok(())
    }

    fn block(&self, id: CardId, reason: &str, at: DateTime<Utc>) -> Result<()> {
        let mut conn = checkout(&self.pool)?;

        diesel::insert_into(blocks::table)
            .values(&NewBlockRow {
                card_id: id.value(),
                block_reason: reason,
                blocked_at: at.to_rfc3339(),
            })
            .execute(&mut conn)?;

        Ok(())
    }

    fn unblock(&self, id: CardId, reason: &str, at: DateTime<Utc>) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;

        let updated = diesel::update(
            blocks::table
                .filter(blocks::card_id.eq(id.value()))
                .filter(blocks::unblock_reason.is_null()),
        )
        .set((
            blocks::unblock_reason.eq(reason),
            blocks::unblocked_at.eq(at.to_rfc3339()),
        ))
        .execute(&mut conn)?;

        Ok(updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::board_store::SqliteBoardStore;
    use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
    use crate::domain::{Board, BoardDraft};
    use crate::port::outbound::store::BoardStore;

    fn setup() -> (DbPool, Board) {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let draft = BoardDraft::new("Sprint", "Todo", &["Doing"], "Done", "Dropped").unwrap();
        let board = SqliteBoardStore::new(pool.clone())
            .insert(&draft, Utc::now())
            .unwrap();
        (pool, board)
    }

    fn new_card(column: ColumnId) -> NewCard<'static> {
        NewCard {
            title: "Ship it",
            description: "release 1.0",
            column_id: column,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_get_roundtrip() {
        let (pool, board) = setup();
        let store = SqliteCardStore::new(pool);
        let initial = board.initial_column().unwrap().id;

        let card = store.insert(&new_card(initial)).unwrap();
        let loaded = store.get(card.id).unwrap().unwrap();

        assert_eq!(loaded, card);
        assert_eq!(loaded.column_id, initial);
        assert!(loaded.blocks.is_empty());
        assert!(store.get(CardId::new(404)).unwrap().is_none());
    }

    #[test]
    fn move_changes_column() {
        let (pool, board) = setup();
        let store = SqliteCardStore::new(pool);
        let card = store
            .insert(&new_card(board.initial_column().unwrap().id))
            .unwrap();
        let done = board.final_column().unwrap().id;

        store.move_to_column(card.id, done).unwrap();

        assert_eq!(store.get(card.id).unwrap().unwrap().column_id, done);
    }

    #[test]
    fn block_and_unblock_lifecycle() {
        let (pool, board) = setup();
        let store = SqliteCardStore::new(pool);
        let card = store
            .insert(&new_card(board.initial_column().unwrap().id))
            .unwrap();

        store.block(card.id, "waiting on review", Utc::now()).unwrap();
        let blocked = store.get(card.id).unwrap().unwrap();
        assert!(blocked.is_blocked());
        assert_eq!(
            blocked.active_block().unwrap().block_reason,
            "waiting on review"
        );

        assert!(store.unblock(card.id, "reviewed", Utc::now()).unwrap());
        let free = store.get(card.id).unwrap().unwrap();
        assert!(!free.is_blocked());
        assert_eq!(free.blocks_amount(), 1);
        assert_eq!(free.blocks[0].unblock_reason.as_deref(), Some("reviewed"));
        assert!(free.blocks[0].unblocked_at.is_some());

        assert!(!store.unblock(card.id, "again", Utc::now()).unwrap());
    }

    #[test]
    fn list_in_columns_attaches_blocks() {
        let (pool, board) = setup();
        let store = SqliteCardStore::new(pool);
        let initial = board.initial_column().unwrap().id;
        let first = store.insert(&new_card(initial)).unwrap();
        let second = store.insert(&new_card(initial)).unwrap();
        store.block(second.id, "stuck", Utc::now()).unwrap();

        let column_ids: Vec<_> = board.columns.iter().map(|c| c.id).collect();
        let cards = store.list_in_columns(&column_ids).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, first.id);
        assert!(!cards[0].is_blocked());
        assert!(cards[1].is_blocked());
    }

    #[test]
    fn column_name_lookup() {
        let (pool, board) = setup();
        let store = SqliteCardStore::new(pool);
        let done = board.final_column().unwrap().id;

        assert_eq!(store.column_name(done).unwrap().as_deref(), Some("Done"));
        assert!(store.column_name(ColumnId::new(500)).unwrap().is_none());
    }

    #[test]
    fn card_insert_into_missing_column_fails() {
        let (pool, _board) = setup();
        let store = SqliteCardStore::new(pool);

        assert!(store.insert(&new_card(ColumnId::new(9_999))).is_err());
    }
}
