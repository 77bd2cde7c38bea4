//! Command modules for the gqlt CLI.
//!
//! Each subcommand is implemented in its own file: an `*Args` struct built by
//! `main` from the parsed flags and the loaded configuration, and a `run_*`
//! function that executes it.

pub mod common;

pub mod check;
pub mod config;
pub mod position;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use config::{run_config, ConfigArgs};
pub use position::{run_position, PositionArgs};
pub use tokens::{run_tokens, TokensArgs};
