//! Interactive menus.
//!
//! The main menu manages boards; selecting a board opens the board menu.
//! Rule violations and missing rows are reported and the menu carries on.
//! Storage and terminal failures end the session.

pub mod board_menu;
pub mod main_menu;

pub use main_menu::run;

use crate::adapter::inbound::cli::output;
use crate::error::{Error, Result};

/// Where to go after leaving the board menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Back to the main menu.
    Back,
    /// Leave the program.
    Exit,
}

/// Report recoverable errors and keep the menu running.
///
/// Returns `Ok(None)` when an error was reported.
fn recover<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_recoverable(&err) => {
            output::error(&err.to_string());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn is_recoverable(err: &Error) -> bool {
    matches!(
        err,
        Error::Domain(_) | Error::BoardNotFound(_) | Error::CardNotFound(_)
    )
}
