//! Handlers for the `card` command group.

use serde_json::json;

use crate::adapter::inbound::cli::command::{
    CardBlockArgs, CardCreateArgs, CardOnBoardArgs, CardUnblockArgs,
};
use crate::adapter::inbound::cli::output;
use crate::domain::validation::MAX_DESCRIPTION_CHARS;
use crate::domain::{BoardColumn, Card, CardDetails, CardDraft, CardId};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::Services;

/// Execute `card create`.
pub fn create(services: &Services, args: &CardCreateArgs) -> Result<()> {
    let board = services.boards.require(args.board)?;
    let draft = CardDraft::new(&args.title, &args.description)?;
    let card = services.cards.create(&board, &draft)?;
    render_created(&card, draft.truncated);
    Ok(())
}

/// Execute `card move`.
pub fn move_next(services: &Services, args: &CardOnBoardArgs) -> Result<()> {
    let board = services.boards.require(args.board)?;
    let column = services.cards.move_to_next_column(&board, args.id)?;
    render_moved("card.move", args.id, &column);
    Ok(())
}

/// Execute `card cancel`.
pub fn cancel(services: &Services, args: &CardOnBoardArgs) -> Result<()> {
    let board = services.boards.require(args.board)?;
    let column = services.cards.cancel(&board, args.id)?;
    render_moved("card.cancel", args.id, &column);
    Ok(())
}

/// Execute `card block`.
pub fn block(services: &Services, args: &CardBlockArgs) -> Result<()> {
    let board = services.boards.require(args.board)?;
    services.cards.block(&board, args.id, &args.reason)?;
    render_blocked(args.id, true);
    Ok(())
}

/// Execute `card unblock`.
pub fn unblock(services: &Services, args: &CardUnblockArgs) -> Result<()> {
    services.cards.unblock(args.id, &args.reason)?;
    render_blocked(args.id, false);
    Ok(())
}

/// Execute `card show`.
pub fn show(services: &Services, id: CardId) -> Result<()> {
    let details = services.cards.details(id)?.ok_or(Error::CardNotFound(id))?;
    render_details(&details);
    Ok(())
}

pub(crate) fn render_created(card: &Card, truncated: bool) {
    if output::is_json() {
        output::json_output(json!({
            "command": "card.create",
            "card": card,
            "description_truncated": truncated,
        }));
        return;
    }

    if truncated {
        output::warning(&format!(
            "Description truncated to {MAX_DESCRIPTION_CHARS} characters"
        ));
    }
    output::success(&format!("Card '{}' created", card.title));
    output::field("ID", card.id);
}

pub(crate) fn render_moved(command: &str, id: CardId, column: &BoardColumn) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "card_id": id,
            "column": column,
        }));
        return;
    }
    output::success(&format!(
        "Card {id} moved to '{}' ({})",
        column.name, column.kind
    ));
}

pub(crate) fn render_blocked(id: CardId, blocked: bool) {
    if output::is_json() {
        let command = if blocked { "card.block" } else { "card.unblock" };
        output::json_output(json!({
            "command": command,
            "card_id": id,
            "blocked": blocked,
        }));
        return;
    }
    if blocked {
        output::success(&format!("Card {id} blocked"));
    } else {
        output::success(&format!("Card {id} unblocked"));
    }
}

pub(crate) fn render_details(details: &CardDetails) {
    if output::is_json() {
        output::json_output(json!({
            "command": "card.show",
            "card": details,
        }));
        return;
    }

    output::section(&format!("Card {} - {}", details.id, details.title));
    output::field("Description", &details.description);
    output::field(
        "Column",
        format!("{} (id {})", details.column_name, details.column_id),
    );
    output::field("Created", output::timestamp(&details.created_at));
    match &details.block_reason {
        Some(reason) => output::field("Blocked", output::highlight(format!("yes: {reason}"))),
        None => output::field("Blocked", "no"),
    }
    output::field("Blocks", details.blocks_amount);
}
