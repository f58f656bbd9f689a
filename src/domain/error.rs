//! Domain errors for validation and card workflow rules.
//!
//! Validation errors come from the input rules in
//! [`validation`](super::validation). Workflow errors are returned by the
//! card use-cases when a move, block or cancel would violate the board's
//! column order.
//!
//! # Examples
//!
//! ```
//! use boardctl::domain::error::DomainError;
//! use boardctl::domain::validation;
//!
//! let result = validation::name("board name", "x");
//! assert!(matches!(result, Err(DomainError::InvalidName { .. })));
//! ```

use thiserror::Error;

use super::board::ColumnKind;
use super::id::{CardId, ColumnId};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was blank.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Human-readable field name.
        field: &'static str,
    },

    /// A name did not match the allowed alphabet or length.
    #[error("{field} must contain only letters and spaces (2-50 characters)")]
    InvalidName {
        /// Human-readable field name.
        field: &'static str,
    },

    /// Input was not a number.
    #[error("{field} must be a valid number")]
    NotANumber {
        /// Human-readable field name.
        field: &'static str,
    },

    /// Number must be greater than zero.
    #[error("{field} must be greater than zero")]
    NotPositive {
        /// Human-readable field name.
        field: &'static str,
    },

    /// Number must not be negative.
    #[error("{field} must be a positive number")]
    Negative {
        /// Human-readable field name.
        field: &'static str,
    },

    /// Number exceeds the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge {
        /// Human-readable field name.
        field: &'static str,
        /// Largest accepted value.
        max: usize,
    },

    /// Answer was neither yes nor no.
    #[error("answer with 'y' for yes or 'n' for no")]
    InvalidAnswer,

    /// A board layout was missing a column of the given kind.
    #[error("board has no {kind} column")]
    MissingColumn {
        /// The column kind that is absent.
        kind: ColumnKind,
    },

    /// Column id does not belong to the selected board.
    #[error("column {0} does not belong to this board")]
    ColumnNotInBoard(ColumnId),

    /// The card is blocked and must be unblocked first.
    #[error("card {0} is blocked, unblock it before moving it")]
    CardBlocked(CardId),

    /// The card is already blocked.
    #[error("card {0} is already blocked")]
    CardAlreadyBlocked(CardId),

    /// The card is not blocked.
    #[error("card {0} is not blocked")]
    CardNotBlocked(CardId),

    /// The card lives in another board.
    #[error("card {0} belongs to another board")]
    CardInOtherBoard(CardId),

    /// The card reached the final column.
    #[error("card {0} is already finished")]
    CardFinished(CardId),

    /// The card sits in the cancel column.
    #[error("card {0} is canceled")]
    CardCanceled(CardId),

    /// Cards in terminal columns cannot be blocked.
    #[error("card {card} is in a {kind} column and cannot be blocked")]
    CannotBlockInColumn {
        /// The card that was to be blocked.
        card: CardId,
        /// Kind of the column holding the card.
        kind: ColumnKind,
    },
}
