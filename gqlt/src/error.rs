//! Error handling module for the gqlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use gqlc_util::SourceMapError;
use thiserror::Error;

/// Main error type for the gqlt CLI application.
#[derive(Error, Debug)]
pub enum GqltError {
    /// Error when a configuration file is missing or cannot be written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file is not valid TOML for [`Config`](crate::config::Config).
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document contains input the lexer could not scan.
    #[error("Lexical error: {0}")]
    Lex(String),

    /// A position query fell outside the document.
    #[error("Source error: {0}")]
    Source(#[from] SourceMapError),
}

/// Result type alias using GqltError.
pub type Result<T> = std::result::Result<T, GqltError>;
