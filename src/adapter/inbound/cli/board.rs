//! Handlers for the `board` command group.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::{BoardCreateArgs, BoardDeleteArgs};
use crate::adapter::inbound::cli::{output, prompt};
use crate::domain::{Board, BoardDetails, BoardDraft, BoardId, BoardSummary};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap::Services;

#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "ID")]
    id: BoardId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    created: String,
}

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Column")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Cards")]
    cards: i64,
}

/// Execute `board create`.
pub fn create(services: &Services, args: &BoardCreateArgs) -> Result<()> {
    let draft = BoardDraft::new(
        &args.name,
        &args.initial,
        &args.pending,
        &args.final_column,
        &args.cancel,
    )?;
    let board = services.boards.create(&draft)?;
    render_created(&board);
    Ok(())
}

/// Execute `board list`.
pub fn list(services: &Services) -> Result<()> {
    let boards = services.boards.list()?;
    render_list(&boards);
    Ok(())
}

/// Execute `board show`.
pub fn show(services: &Services, id: BoardId) -> Result<()> {
    let details = services
        .boards
        .details(id)?
        .ok_or(Error::BoardNotFound(id))?;
    render_details(&details);
    Ok(())
}

/// Execute `board delete`.
///
/// Asks for confirmation unless `--yes` is given. JSON mode cannot prompt,
/// so it requires `--yes`.
pub fn delete(services: &Services, args: &BoardDeleteArgs) -> Result<()> {
    let board = services.boards.require(args.id)?;

    if !args.yes {
        if output::is_json() {
            return Err(ConfigError::InvalidValue {
                field: "yes",
                reason: "deleting in JSON mode requires --yes".to_string(),
            }
            .into());
        }
        let theme = dialoguer::theme::ColorfulTheme::default();
        let question = format!("Delete board '{}' and all its cards?", board.name);
        if !prompt::confirm(&theme, &question)? {
            output::note("Nothing deleted.");
            return Ok(());
        }
    }

    services.boards.delete(board.id)?;
    render_deleted(&board);
    Ok(())
}

pub(crate) fn render_created(board: &Board) {
    if output::is_json() {
        output::json_output(json!({
            "command": "board.create",
            "board": board,
        }));
        return;
    }

    output::success(&format!("Board '{}' created", board.name));
    output::field("ID", board.id);
    let layout: Vec<_> = board
        .columns
        .iter()
        .map(|c| format!("{} ({})", c.name, c.kind))
        .collect();
    output::field("Columns", layout.join(" -> "));
}

pub(crate) fn render_list(boards: &[BoardSummary]) {
    if output::is_json() {
        output::json_output(json!({
            "command": "board.list",
            "boards": boards,
        }));
        return;
    }

    output::section("Boards");
    if boards.is_empty() {
        output::note("No boards yet.");
        output::hint("create one with `boardctl board create` or the interactive menu");
        return;
    }
    let rows: Vec<_> = boards
        .iter()
        .map(|b| BoardRow {
            id: b.id,
            name: b.name.clone(),
            created: output::timestamp(&b.created_at),
        })
        .collect();
    output::table(&rows);
}

pub(crate) fn render_details(details: &BoardDetails) {
    if output::is_json() {
        output::json_output(json!({
            "command": "board.show",
            "board": details,
            "total_cards": details.total_cards(),
        }));
        return;
    }

    output::section(&format!("Board {} - {}", details.id, details.name));
    let rows: Vec<_> = details
        .columns
        .iter()
        .map(|c| ColumnRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            kind: c.kind.to_string(),
            cards: c.cards_amount,
        })
        .collect();
    output::table(&rows);
    output::field("Total cards", details.total_cards());
}

pub(crate) fn render_deleted(board: &Board) {
    if output::is_json() {
        output::json_output(json!({
            "command": "board.delete",
            "board_id": board.id,
            "deleted": true,
        }));
        return;
    }
    output::success(&format!("Board '{}' deleted", board.name));
}
