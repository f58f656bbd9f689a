//! CLI module graph.

pub mod board;
pub mod card;
pub mod column;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod menu;
pub mod migrate;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod run;
pub mod stats;
