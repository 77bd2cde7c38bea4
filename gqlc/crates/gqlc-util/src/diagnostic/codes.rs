//! Diagnostic codes for categorizing errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, plus the codes used by the lexer.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("E", 1);
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.to_string(), "E0001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

// Lexer errors (1xxx)

/// Input that no token recognizer accepts
pub const E_LEXER_UNRECOGNIZED_INPUT: DiagnosticCode = DiagnosticCode::new("E", 1001);
/// A `"` string with no closing quote on the same line
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 1002);
/// A `"""` block string with no closing delimiter
pub const E_LEXER_UNTERMINATED_BLOCK_STRING: DiagnosticCode = DiagnosticCode::new("E", 1003);
/// A malformed numeric literal
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 1004);
/// One or two dots where `...` was expected
pub const E_LEXER_INVALID_PUNCTUATOR: DiagnosticCode = DiagnosticCode::new("E", 1005);
