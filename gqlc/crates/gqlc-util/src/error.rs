//! Core error types for gqlc-util crate
//!
//! The scanner itself never fails; these errors only come from checked
//! lookups into a [`SourceFile`](crate::SourceFile).

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceMapError {
    /// Scalar index past the end of the file
    #[error("Index out of bounds: index {index}, file has {len} scalars")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
