//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the ordered recognizer chain
//! and the driver loop that applies it.

use std::fmt;

use gqlc_util::Span;
use tracing::{debug, trace};

use super::{
    recognize_float, recognize_identifier, recognize_int, recognize_punctuator, recognize_string,
};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, Trivia};

/// A token recognizer.
///
/// On success the cursor has moved past the whole token. On failure it has
/// not moved at all.
pub type Recognizer = fn(&mut Cursor<'_>) -> Option<TokenKind>;

/// Names the entries of [`RECOGNIZERS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    /// Fixed punctuation, including `...`
    Punctuator,
    /// Names
    Identifier,
    /// Int part followed by a fractional and/or exponent part
    Float,
    /// Int part alone
    Int,
    /// Block and single-quoted strings
    String,
}

impl RecognizerKind {
    /// A short, stable name.
    pub fn name(&self) -> &'static str {
        match self {
            RecognizerKind::Punctuator => "punctuator",
            RecognizerKind::Identifier => "identifier",
            RecognizerKind::Float => "float",
            RecognizerKind::Int => "int",
            RecognizerKind::String => "string",
        }
    }
}

impl fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The recognizer chain, in priority order.
///
/// The first recognizer to succeed at a position wins. Float must come
/// before int so that `1.5` is never split into `1` and `.5`.
pub const RECOGNIZERS: [(RecognizerKind, Recognizer); 5] = [
    (RecognizerKind::Punctuator, recognize_punctuator),
    (RecognizerKind::Identifier, recognize_identifier),
    (RecognizerKind::Float, recognize_float),
    (RecognizerKind::Int, recognize_int),
    (RecognizerKind::String, recognize_string),
];

/// Lexer for GraphQL documents.
///
/// The lexer transforms a sequence of Unicode scalars into tokens. Between
/// tokens it skips whitespace, commas and comments. When no recognizer
/// accepts the input at some position, the rest of the input becomes a
/// single [`TokenKind::UnrecognizedInput`] token and the lexer stops.
///
/// # Example
///
/// ```
/// use gqlc_lex::{Lexer, TokenKind};
///
/// let chars: Vec<char> = "{ hero }".chars().collect();
/// let kinds: Vec<TokenKind> = Lexer::new(&chars).map(|t| t.kind).collect();
///
/// assert_eq!(
///     kinds,
///     vec![TokenKind::LBrace, TokenKind::Identifier("hero".into()), TokenKind::RBrace]
/// );
/// ```
pub struct Lexer<'a> {
    /// Scalar cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Skipped trivia, recorded only when requested.
    pub(super) trivia: Option<Vec<Trivia>>,

    /// Set once the input is exhausted or an unrecognized remainder was emitted.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a [char]) -> Self {
        Self {
            cursor: Cursor::new(source),
            trivia: None,
            finished: false,
        }
    }

    /// Makes the lexer record every trivia run it skips.
    ///
    /// Recorded trivia is retrieved with [`Lexer::take_trivia`].
    pub fn with_trivia(mut self) -> Self {
        self.trivia = Some(Vec::new());
        self
    }

    /// Returns the trivia recorded so far, leaving the record empty.
    ///
    /// Always empty unless the lexer was built [`with_trivia`](Lexer::with_trivia).
    pub fn take_trivia(&mut self) -> Vec<Trivia> {
        self.trivia.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Skips trivia, then tries each entry of [`RECOGNIZERS`] in order.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        self.skip_trivia();

        if self.cursor.is_empty() {
            self.finished = true;
            return None;
        }

        let start = self.cursor.position();
        for (kind, recognize) in RECOGNIZERS {
            if let Some(token) = recognize(&mut self.cursor) {
                let span = Span::new(start, self.cursor.position());
                trace!(recognizer = %kind, %span, "recognized {}", token);
                return Some(Token::new(token, span));
            }
        }

        Some(self.unrecognized_remainder(start))
    }

    /// Packages everything from `start` to the end as one unrecognized token.
    fn unrecognized_remainder(&mut self, start: usize) -> Token {
        let len = self.cursor.remaining().len();
        self.cursor.advance_n(len);
        self.finished = true;

        let span = Span::new(start, self.cursor.position());
        debug!(%span, "no recognizer matched; stopping with unrecognized input");
        Token::new(TokenKind::UnrecognizedInput(self.cursor.text_from(start)), span)
    }

    /// Returns the index of the next unscanned scalar.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
