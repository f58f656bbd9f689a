//! Main menu: create, select, delete and list boards.

use dialoguer::theme::ColorfulTheme;

use super::board_menu;
use super::{recover, Flow};
use crate::adapter::inbound::cli::{board, output, prompt};
use crate::domain::{BoardDraft, BoardId};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap::Services;

const ITEMS: [&str; 5] = [
    "Create a board",
    "Select a board",
    "Delete a board",
    "List boards",
    "Exit",
];

/// Run the interactive session until the user exits.
pub fn run(services: &Services) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "the interactive menu cannot run in JSON mode; use the board, card and stats commands"
                .to_string(),
        }
        .into());
    }

    let theme = ColorfulTheme::default();
    output::header(env!("CARGO_PKG_VERSION"));
    output::note("Manage your boards. Pick an option to start.");

    loop {
        match prompt::select(&theme, "Main menu", &ITEMS)? {
            0 => {
                recover(create_board(services, &theme))?;
            }
            1 => {
                if recover(select_board(services, &theme))? == Some(Flow::Exit) {
                    break;
                }
            }
            2 => {
                recover(delete_board(services, &theme))?;
            }
            3 => {
                recover(list_boards(services))?;
            }
            _ => break,
        }
    }

    output::success("Bye!");
    Ok(())
}

fn create_board(services: &Services, theme: &ColorfulTheme) -> Result<()> {
    output::section("New board");
    let name = prompt::name(theme, "Board name", "board name")?;
    let extra = prompt::count(
        theme,
        "How many pending columns besides initial, final and cancel? (0 for none)",
        "number of columns",
    )?;

    let initial = prompt::name(theme, "Initial column name", "initial column name")?;
    let mut pending = Vec::new();
    for i in 1..=extra {
        pending.push(prompt::name(
            theme,
            &format!("Pending column {i} name"),
            "pending column name",
        )?);
    }
    let final_name = prompt::name(theme, "Final column name", "final column name")?;
    let cancel = prompt::name(theme, "Cancel column name", "cancel column name")?;

    let draft = BoardDraft::new(&name, &initial, &pending, &final_name, &cancel)?;
    let created = services.boards.create(&draft)?;
    board::render_created(&created);
    Ok(())
}

fn select_board(services: &Services, theme: &ColorfulTheme) -> Result<Flow> {
    let id: BoardId = prompt::id(theme, "Board id", "board id")?;
    let selected = services.boards.require(id)?;
    board_menu::run(services, theme, &selected)
}

fn delete_board(services: &Services, theme: &ColorfulTheme) -> Result<()> {
    let id: BoardId = prompt::id(theme, "Id of the board to delete", "board id")?;
    let confirmed = prompt::confirm(
        theme,
        "Delete this board with all its cards? This cannot be undone",
    )?;
    if !confirmed {
        output::note("Nothing deleted.");
        return Ok(());
    }

    let target = services.boards.require(id)?;
    if !services.boards.delete(id)? {
        return Err(Error::BoardNotFound(id));
    }
    board::render_deleted(&target);
    Ok(())
}

fn list_boards(services: &Services) -> Result<()> {
    let boards = services.boards.list()?;
    board::render_list(&boards);
    Ok(())
}
