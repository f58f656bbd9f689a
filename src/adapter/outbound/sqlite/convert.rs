//! Row <-> domain conversions shared by the SQLite stores.

use chrono::{DateTime, Utc};

use super::database::model::{BlockRow, CardRow, ColumnRow};
use crate::domain::{Block, BlockId, BoardColumn, BoardId, Card, CardId, ColumnId, ColumnKind};
use crate::error::{Error, Result};

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid timestamp '{raw}': {e}")))
}

pub(crate) fn column_from_row(row: ColumnRow) -> Result<BoardColumn> {
    let kind: ColumnKind = row.kind.parse().map_err(Error::Parse)?;
    Ok(BoardColumn {
        id: ColumnId::new(row.id),
        name: row.name,
        position: row.position,
        kind,
        board_id: BoardId::new(row.board_id),
    })
}

pub(crate) fn block_from_row(row: BlockRow) -> Result<Block> {
    Ok(Block {
        id: BlockId::new(row.id),
        card_id: CardId::new(row.card_id),
        block_reason: row.block_reason,
        blocked_at: parse_timestamp(&row.blocked_at)?,
        unblock_reason: row.unblock_reason,
        unblocked_at: row
            .unblocked_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?,
    })
}

pub(crate) fn card_from_row(row: CardRow, blocks: Vec<Block>) -> Result<Card> {
    Ok(Card {
        id: CardId::new(row.id),
        title: row.title,
        description: row.description,
        column_id: ColumnId::new(row.board_column_id),
        created_at: parse_timestamp(&row.created_at)?,
        blocks,
    })
}
