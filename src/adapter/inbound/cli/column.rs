//! Handler for the `column` command group.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::ColumnShowArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{CardId, ColumnWithCards, DomainError};
use crate::error::Result;
use crate::infrastructure::bootstrap::Services;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: CardId,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
}

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// Execute `column show`.
pub fn show(services: &Services, args: &ColumnShowArgs) -> Result<()> {
    let board = services.boards.require(args.board)?;
    let column = services
        .boards
        .column(&board, args.id)?
        .ok_or(DomainError::ColumnNotInBoard(args.id))?;
    render(&column);
    Ok(())
}

pub(crate) fn render(column: &ColumnWithCards) {
    if output::is_json() {
        output::json_output(json!({
            "command": "column.show",
            "column": column,
        }));
        return;
    }

    output::section(&format!("Column {} - {} ({})", column.id, column.name, column.kind));
    if column.cards.is_empty() {
        output::note("No cards in this column.");
        return;
    }
    let rows: Vec<_> = column
        .cards
        .iter()
        .map(|c| CardRow {
            id: c.id,
            title: c.title.clone(),
            description: preview(&c.description),
        })
        .collect();
    output::table(&rows);
}

fn preview(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS - 3).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn preview_cuts_long_text_on_char_boundary() {
        let long = "é".repeat(100);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), DESCRIPTION_PREVIEW_CHARS);
        assert!(cut.ends_with("..."));
    }
}
