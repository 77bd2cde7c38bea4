//! gqlc-lex - Lexical Analyzer for GraphQL
//!
//! This crate turns GraphQL source text into a sequence of tokens following
//! the GraphQL lexical grammar. It performs no I/O and never fails: input it
//! cannot scan is returned as a final [`TokenKind::UnrecognizedInput`] token.
//!
//! # Overview
//!
//! The scanner walks a slice of Unicode scalars with a [`Cursor`]. Before each
//! token it skips trivia (whitespace, commas and `#` comments), then tries the
//! recognizers in [`RECOGNIZERS`] in order. A recognizer either consumes a
//! whole token or leaves the cursor untouched, so trying the next one always
//! starts from the same place.
//!
//! # Example Usage
//!
//! ```
//! use gqlc_lex::{tokenize, StringLiteral, TokenKind};
//!
//! let tokens = tokenize(r#"query { hero(episode: "JEDI", limit: -2) }"#);
//! let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
//!
//! assert_eq!(kinds[0], TokenKind::Identifier("query".into()));
//! assert_eq!(kinds[6], TokenKind::StringValue(StringLiteral::SingleQuote("JEDI".into())));
//! assert_eq!(kinds[9], TokenKind::IntValue("-2".into()));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and trivia type definitions
//! - [`lexer`] - Recognizers and the [`Lexer`] driver
//! - [`cursor`] - Scalar cursor with snapshot/restore backtracking
//! - [`chars`] - Character classes
//! - [`diagnostics`] - Turning unrecognized input into diagnostics
//!
//! # Token Categories
//!
//! ## Names
//!
//! `[_A-Za-z][_0-9A-Za-z]*`, extended to any Unicode letter or digit.
//! Keywords such as `query`, `fragment` or `true` are ordinary names.
//!
//! ## Literals
//!
//! - **Int**: `0`, `42`, `-7`
//! - **Float**: `1.5`, `1e10`, `-2.5E-3`
//! - **String**: `"hello"`, `"""multi-line"""`, kept raw (escapes are not decoded)
//!
//! ## Punctuators
//!
//! `!` `$` `(` `)` `...` `:` `=` `@` `[` `]` `{` `}` `|`
//!
//! ## Trivia
//!
//! Whitespace (including the byte-order mark), `,` and `#` comments produce no
//! tokens. [`tokenize_with_trivia`] returns them alongside the tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod diagnostics;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorSnapshot};
pub use diagnostics::{report_unrecognized, report_unrecognized_as};
pub use lexer::{Lexer, Recognizer, RecognizerKind, RECOGNIZERS};
pub use token::{StringLiteral, Token, TokenKind, Trivia, TriviaKind};

use tracing::debug;

/// Tokenizes a whole document.
///
/// Tokens come back in source order. If some part of the input cannot be
/// scanned, everything from that point on is the last token, an
/// [`TokenKind::UnrecognizedInput`].
pub fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let tokens: Vec<Token> = Lexer::new(&chars).collect();
    debug!(tokens = tokens.len(), scalars = chars.len(), "tokenized");
    tokens
}

/// Tokenizes a whole document, also returning the trivia skipped between tokens.
///
/// Together, the tokens and the trivia cover every scalar of the input
/// exactly once.
///
/// ```
/// use gqlc_lex::{tokenize_with_trivia, TriviaKind};
///
/// let (tokens, trivia) = tokenize_with_trivia("a, b # done");
/// assert_eq!(tokens.len(), 2);
/// let kinds: Vec<TriviaKind> = trivia.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TriviaKind::Comma, TriviaKind::Whitespace, TriviaKind::Whitespace, TriviaKind::Comment]
/// );
/// ```
pub fn tokenize_with_trivia(source: &str) -> (Vec<Token>, Vec<Trivia>) {
    let chars: Vec<char> = source.chars().collect();
    let mut lexer = Lexer::new(&chars).with_trivia();
    let tokens: Vec<Token> = lexer.by_ref().collect();
    let trivia = lexer.take_trivia();
    debug!(tokens = tokens.len(), trivia = trivia.len(), "tokenized with trivia");
    (tokens, trivia)
}
