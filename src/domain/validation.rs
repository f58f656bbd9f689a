//! Input rules shared by the interactive prompts and the scriptable commands.

use super::error::DomainError;

/// Longest description kept; longer input is truncated.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Largest count accepted for pending columns.
pub const MAX_COUNT: usize = 100;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 50;

/// A description after length normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    /// True when the input exceeded [`MAX_DESCRIPTION_CHARS`].
    pub truncated: bool,
}

/// Require a non-blank value, returning it trimmed.
pub fn non_empty(field: &'static str, input: &str) -> Result<String, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Letters (including Latin-1 accented letters) and whitespace, 2 to 50 characters.
pub fn name(field: &'static str, input: &str) -> Result<String, DomainError> {
    let value = non_empty(field, input)?;
    let len = value.chars().count();
    let alphabet_ok = value.chars().all(is_name_char);
    if !alphabet_ok || !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(DomainError::InvalidName { field });
    }
    Ok(value)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c.is_ascii_whitespace()
        || c == '\u{0B}'
        || ('\u{C0}'..='\u{FF}').contains(&c)
}

/// Non-empty description, truncated to [`MAX_DESCRIPTION_CHARS`].
pub fn description(input: &str) -> Result<Description, DomainError> {
    let value = non_empty("description", input)?;
    if value.chars().count() > MAX_DESCRIPTION_CHARS {
        return Ok(Description {
            text: value.chars().take(MAX_DESCRIPTION_CHARS).collect(),
            truncated: true,
        });
    }
    Ok(Description {
        text: value,
        truncated: false,
    })
}

/// Integer strictly greater than zero, used for row ids.
pub fn positive_id(field: &'static str, input: &str) -> Result<i32, DomainError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| DomainError::NotANumber { field })?;
    if value <= 0 {
        return Err(DomainError::NotPositive { field });
    }
    i32::try_from(value).map_err(|_| DomainError::NotANumber { field })
}

/// Integer from zero up to [`MAX_COUNT`].
pub fn non_negative_count(field: &'static str, input: &str) -> Result<usize, DomainError> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| DomainError::NotANumber { field })?;
    let value = usize::try_from(value).map_err(|_| DomainError::Negative { field })?;
    if value > MAX_COUNT {
        return Err(DomainError::TooLarge {
            field,
            max: MAX_COUNT,
        });
    }
    Ok(value)
}

/// Parse a yes/no answer.
pub fn yes_no(input: &str) -> Result<bool, DomainError> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "sim" => Ok(true),
        "n" | "no" | "não" | "nao" => Ok(false),
        _ => Err(DomainError::InvalidAnswer),
    }
}
