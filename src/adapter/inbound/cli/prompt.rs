//! Validated interactive prompts.
//!
//! Each prompt re-asks until the answer passes the matching rule from
//! [`validation`], so menus only ever see valid input.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::domain::validation;
use crate::domain::DomainError;
use crate::error::Result;

/// Ask until `rule` accepts the answer, returning the normalized value.
fn ask<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    rule: impl Fn(&str) -> std::result::Result<T, DomainError>,
) -> Result<T> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| {
            rule(input.as_str())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(rule(&raw)?)
}

/// A board or column name.
pub fn name(theme: &ColorfulTheme, prompt: &str, field: &'static str) -> Result<String> {
    ask(theme, prompt, |s| validation::name(field, s))
}

/// Any non-blank text.
pub fn text(theme: &ColorfulTheme, prompt: &str, field: &'static str) -> Result<String> {
    ask(theme, prompt, |s| validation::non_empty(field, s))
}

/// A description, truncated to the maximum length.
pub fn description(theme: &ColorfulTheme, prompt: &str) -> Result<validation::Description> {
    ask(theme, prompt, validation::description)
}

/// A positive row id.
pub fn id<T: From<i32>>(theme: &ColorfulTheme, prompt: &str, field: &'static str) -> Result<T> {
    ask(theme, prompt, |s| validation::positive_id(field, s)).map(T::from)
}

/// A count that may be zero.
pub fn count(theme: &ColorfulTheme, prompt: &str, field: &'static str) -> Result<usize> {
    ask(theme, prompt, |s| validation::non_negative_count(field, s))
}

/// A yes/no question answered with `y` or `n`.
pub fn confirm(theme: &ColorfulTheme, prompt: &str) -> Result<bool> {
    ask(theme, &format!("{prompt} (y/n)"), validation::yes_no)
}

/// Pick one of `items`, returning its index.
pub fn select(theme: &ColorfulTheme, prompt: &str, items: &[&str]) -> Result<usize> {
    Ok(Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}
