//! Board menu: card workflow and views for one board.

use dialoguer::theme::ColorfulTheme;

use super::{recover, Flow};
use crate::adapter::inbound::cli::{board, card, column, output, prompt, stats};
use crate::domain::{Board, CardDraft, CardId, DomainError};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::Services;

const ITEMS: [&str; 11] = [
    "Create a card",
    "Move a card to the next column",
    "Block a card",
    "Unblock a card",
    "Cancel a card",
    "View board",
    "View column with cards",
    "View card",
    "Board statistics",
    "Back to main menu",
    "Exit",
];

/// Run the board menu until the user goes back or exits.
pub fn run(services: &Services, theme: &ColorfulTheme, board: &Board) -> Result<Flow> {
    output::section(&format!("Board: {}", board.name));

    loop {
        let choice = prompt::select(theme, &format!("{} menu", board.name), &ITEMS)?;
        let outcome = match choice {
            0 => create_card(services, theme, board),
            1 => move_card(services, theme, board),
            2 => block_card(services, theme, board),
            3 => unblock_card(services, theme),
            4 => cancel_card(services, theme, board),
            5 => show_board(services, board),
            6 => show_column(services, theme, board),
            7 => show_card(services, theme),
            8 => stats::render_board(services, board),
            9 => return Ok(Flow::Back),
            _ => return Ok(Flow::Exit),
        };
        recover(outcome)?;
    }
}

fn card_id(theme: &ColorfulTheme, prompt_text: &str) -> Result<CardId> {
    prompt::id(theme, prompt_text, "card id")
}

fn create_card(services: &Services, theme: &ColorfulTheme, board: &Board) -> Result<()> {
    let title = prompt::text(theme, "Card title", "title")?;
    let description = prompt::description(theme, "Card description")?;
    let draft = CardDraft::new(&title, &description.text)?;
    let created = services.cards.create(board, &draft)?;
    card::render_created(&created, description.truncated);
    Ok(())
}

fn move_card(services: &Services, theme: &ColorfulTheme, board: &Board) -> Result<()> {
    let id = card_id(theme, "Id of the card to move")?;
    let column = services.cards.move_to_next_column(board, id)?;
    card::render_moved("card.move", id, &column);
    Ok(())
}

fn block_card(services: &Services, theme: &ColorfulTheme, board: &Board) -> Result<()> {
    let id = card_id(theme, "Id of the card to block")?;
    let reason = prompt::text(theme, "Block reason", "block reason")?;
    services.cards.block(board, id, &reason)?;
    card::render_blocked(id, true);
    Ok(())
}

fn unblock_card(services: &Services, theme: &ColorfulTheme) -> Result<()> {
    let id = card_id(theme, "Id of the card to unblock")?;
    let reason = prompt::text(theme, "Unblock reason", "unblock reason")?;
    services.cards.unblock(id, &reason)?;
    card::render_blocked(id, false);
    Ok(())
}

fn cancel_card(services: &Services, theme: &ColorfulTheme, board: &Board) -> Result<()> {
    let id = card_id(theme, "Id of the card to cancel")?;
    let column = services.cards.cancel(board, id)?;
    card::render_moved("card.cancel", id, &column);
    Ok(())
}

fn show_board(services: &Services, board: &Board) -> Result<()> {
    let details = services
        .boards
        .details(board.id)?
        .ok_or(Error::BoardNotFound(board.id))?;
    board::render_details(&details);
    Ok(())
}

fn show_column(services: &Services, theme: &ColorfulTheme, board: &Board) -> Result<()> {
    let labels: Vec<String> = board
        .columns
        .iter()
        .map(|c| format!("{} - {} [{}]", c.id, c.name, c.kind))
        .collect();
    let items: Vec<&str> = labels.iter().map(String::as_str).collect();
    let index = prompt::select(theme, "Column", &items)?;

    let Some(selected) = board.columns.get(index) else {
        return Ok(());
    };
    let view = services
        .boards
        .column(board, selected.id)?
        .ok_or(DomainError::ColumnNotInBoard(selected.id))?;
    column::render(&view);
    Ok(())
}

fn show_card(services: &Services, theme: &ColorfulTheme) -> Result<()> {
    let id = card_id(theme, "Card id")?;
    let details = services.cards.details(id)?.ok_or(Error::CardNotFound(id))?;
    card::render_details(&details);
    Ok(())
}
