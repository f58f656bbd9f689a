//! SQLite board store implementation.
//!
//! Provides persistent storage for boards and their columns using SQLite
//! and Diesel ORM.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::dsl::count_star;
use diesel::prelude::*;
use tracing::debug;

use super::convert::{column_from_row, parse_timestamp};
use super::database::connection::{checkout, DbConn, DbPool};
use super::database::model::{BoardRow, CardRow, ColumnRow, NewBoardRow, NewColumnRow};
use super::database::schema::{boards, boards_columns, cards};
use crate::domain::{
    Board, BoardDetails, BoardDraft, BoardId, BoardSummary, CardId, CardSummary, ColumnId,
    ColumnOverview, ColumnWithCards,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::BoardStore;

/// SQLite-backed board store.
pub struct SqliteBoardStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBoardStore {
    /// Create a new SQLite board store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn load_board(conn: &mut DbConn, id: BoardId) -> Result<Option<Board>> {
        let row: Option<BoardRow> = boards::table
            .find(id.value())
            .select(BoardRow::as_select())
            .first(conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let columns = boards_columns::table
            .filter(boards_columns::board_id.eq(row.id))
            .order(boards_columns::position.asc())
            .select(ColumnRow::as_select())
            .load(conn)?
            .into_iter()
            .map(column_from_row)
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Board::new(
            BoardId::new(row.id),
            row.name,
            parse_timestamp(&row.created_at)?,
            columns,
        )))
    }
}

impl BoardStore for SqliteBoardStore {
    fn insert(&self, draft: &BoardDraft, created_at: DateTime<Utc>) -> Result<Board> {
        let mut conn = checkout(&self.pool)?;
        let created = created_at.to_rfc3339();

        let board_id = conn.transaction::<_, Error, _>(|conn| {
            let board_id: i32 = diesel::insert_into(boards::table)
                .values(&NewBoardRow {
                    name: &draft.name,
                    created_at: created.clone(),
                })
                .returning(boards::id)
                .get_result(conn)?;

            for column in &draft.columns {
                diesel::insert_into(boards_columns::table)
                    .values(&NewColumnRow {
                        name: &column.name,
                        position: column.position,
                        kind: column.kind.as_str(),
                        board_id,
                    })
                    .execute(conn)?;
            }

            Ok(board_id)
        })?;

        debug!(board_id, columns = draft.columns.len(), "inserted board");
        Self::load_board(&mut conn, BoardId::new(board_id))?
            .ok_or(Error::BoardNotFound(BoardId::new(board_id)))
    }

    fn get(&self, id: BoardId) -> Result<Option<Board>> {
        let mut conn = checkout(&self.pool)?;
        Self::load_board(&mut conn, id)
    }

    fn list(&self) -> Result<Vec<BoardSummary>> {
        let mut conn = checkout(&self.pool)?;

        boards::table
            .order(boards::id.asc())
            .select(BoardRow::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(|row| {
                Ok(BoardSummary {
                    id: BoardId::new(row.id),
                    name: row.name,
                    created_at: parse_timestamp(&row.created_at)?,
                })
            })
            .collect()
    }

    fn delete(&self, id: BoardId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;

        let deleted = diesel::delete(boards::table.find(id.value())).execute(&mut conn)?;

        Ok(deleted > 0)
    }

    fn details(&self, id: BoardId) -> Result<Option<BoardDetails>> {
        let mut conn = checkout(&self.pool)?;

        let Some(board) = Self::load_board(&mut conn, id)? else {
            return Ok(None);
        };

        let column_ids: Vec<i32> = board.columns.iter().map(|c| c.id.value()).collect();
        let counts: HashMap<i32, i64> = cards::table
            .filter(cards::board_column_id.eq_any(&column_ids))
            .group_by(cards::board_column_id)
            .select((cards::board_column_id, count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        let columns = board
            .columns
            .into_iter()
            .map(|c| ColumnOverview {
                cards_amount: counts.get(&c.id.value()).copied().unwrap_or(0),
                id: c.id,
                name: c.name,
                kind: c.kind,
                position: c.position,
            })
            .collect();

        Ok(Some(BoardDetails {
            id: board.id,
            name: board.name,
            columns,
        }))
    }

    fn column_with_cards(&self, id: ColumnId) -> Result<Option<ColumnWithCards>> {
        let mut conn = checkout(&self.pool)?;

        let row: Option<ColumnRow> = boards_columns::table
            .find(id.value())
            .select(ColumnRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };
        let column = column_from_row(row)?;

        let cards = cards::table
            .filter(cards::board_column_id.eq(column.id.value()))
            .order(cards::id.asc())
            .select(CardRow::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(|card| CardSummary {
                id: CardId::new(card.id),
                title: card.title,
                description: card.description,
            })
            .collect();

        Ok(Some(ColumnWithCards {
            id: column.id,
            name: column.name,
            kind: column.kind,
            cards,
        }))
    }
}
