//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{blocks, boards, boards_columns, cards};

/// Database row for a board (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BoardRow {
    pub id: i32,
    pub name: String,
    pub created_at: String,
}

/// Database row for a board (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = boards)]
pub struct NewBoardRow<'a> {
    pub name: &'a str,
    pub created_at: String,
}

/// Database row for a board column (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = boards_columns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ColumnRow {
    pub id: i32,
    pub name: String,
    pub position: i32,
    pub kind: String,
    pub board_id: i32,
}

/// Database row for a board column (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = boards_columns)]
pub struct NewColumnRow<'a> {
    pub name: &'a str,
    pub position: i32,
    pub kind: &'static str,
    pub board_id: i32,
}

/// Database row for a card (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CardRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub board_column_id: i32,
    pub created_at: String,
}

/// Database row for a card (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = cards)]
pub struct NewCardRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub board_column_id: i32,
    pub created_at: String,
}

/// Database row for a block (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = blocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BlockRow {
    pub id: i32,
    pub card_id: i32,
    pub block_reason: String,
    pub blocked_at: String,
    pub unblock_reason: Option<String>,
    pub unblocked_at: Option<String>,
}

/// Database row for a block (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = blocks)]
pub struct NewBlockRow<'a> {
    pub card_id: i32,
    pub block_reason: &'a str,
    pub blocked_at: String,
}
