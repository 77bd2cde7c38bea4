//! Token definitions for the GraphQL lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] of scalars it was
//! scanned from. Tokens are plain values: once the lexer hands one out, it is
//! never modified.

use std::borrow::Cow;
use std::fmt;

use gqlc_util::Span;

/// The body of a string literal, tagged by its delimiter style.
///
/// Bodies are kept exactly as written: escape sequences are not decoded and
/// block strings are not re-indented.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StringLiteral {
    /// `"""..."""`
    BlockQuote(String),
    /// `"..."`
    SingleQuote(String),
}

impl StringLiteral {
    /// The raw text between the delimiters.
    pub fn content(&self) -> &str {
        match self {
            StringLiteral::BlockQuote(s) | StringLiteral::SingleQuote(s) => s,
        }
    }

    /// The delimiter that opens and closes this literal.
    pub fn delimiter(&self) -> &'static str {
        match self {
            StringLiteral::BlockQuote(_) => "\"\"\"",
            StringLiteral::SingleQuote(_) => "\"",
        }
    }
}

/// The kind of a lexical token.
///
/// Keywords such as `query` or `fragment` are ordinary [`TokenKind::Identifier`]s;
/// telling them apart is left to the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name: `[_A-Za-z][_0-9A-Za-z]*`, extended to Unicode letters and digits
    Identifier(String),
    /// An integer literal, including a leading `-` if present
    IntValue(String),
    /// A float literal: integer part plus a fractional and/or exponent part
    FloatValue(String),
    /// A string literal
    StringValue(StringLiteral),

    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Eq,
    /// `@`
    At,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `|`
    Pipe,

    /// The rest of the input from the first position no recognizer accepts
    UnrecognizedInput(String),
}

impl TokenKind {
    /// The fixed source text of a punctuator, or `None` for other kinds.
    pub fn punctuator_text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Ellipsis => "...",
            TokenKind::Colon => ":",
            TokenKind::Eq => "=",
            TokenKind::At => "@",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Pipe => "|",
            _ => return None,
        };
        Some(text)
    }

    /// The exact source text this token was scanned from.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::{StringLiteral, TokenKind};
    ///
    /// let kind = TokenKind::StringValue(StringLiteral::SingleQuote("hi".into()));
    /// assert_eq!(kind.lexeme(), "\"hi\"");
    /// assert_eq!(TokenKind::Ellipsis.lexeme(), "...");
    /// ```
    pub fn lexeme(&self) -> Cow<'_, str> {
        match self {
            TokenKind::Identifier(s)
            | TokenKind::IntValue(s)
            | TokenKind::FloatValue(s)
            | TokenKind::UnrecognizedInput(s) => Cow::Borrowed(s),
            TokenKind::StringValue(lit) => {
                let delim = lit.delimiter();
                Cow::Owned(format!("{delim}{}{delim}", lit.content()))
            },
            punct => Cow::Borrowed(punct.punctuator_text().unwrap_or_default()),
        }
    }

    /// A short, stable category name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "identifier",
            TokenKind::IntValue(_) => "int",
            TokenKind::FloatValue(_) => "float",
            TokenKind::StringValue(StringLiteral::SingleQuote(_)) => "string",
            TokenKind::StringValue(StringLiteral::BlockQuote(_)) => "block_string",
            TokenKind::UnrecognizedInput(_) => "unrecognized",
            _ => "punctuator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(s) => write!(f, "identifier `{s}`"),
            TokenKind::IntValue(s) => write!(f, "int `{s}`"),
            TokenKind::FloatValue(s) => write!(f, "float `{s}`"),
            TokenKind::StringValue(lit) => write!(f, "string {:?}", lit.content()),
            TokenKind::UnrecognizedInput(s) => write!(f, "unrecognized input {s:?}"),
            punct => write!(f, "`{}`", punct.lexeme()),
        }
    }
}

/// A token and the scalar range it covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was recognized
    pub kind: TokenKind,
    /// Half-open scalar range `[start, end)` in the original input
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

/// The kind of text skipped between tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// A maximal run of whitespace, line terminators and byte-order marks
    Whitespace,
    /// A single `,`
    Comma,
    /// `#` up to, but not including, the next line terminator
    Comment,
}

impl TriviaKind {
    /// A short, stable category name.
    pub fn name(&self) -> &'static str {
        match self {
            TriviaKind::Whitespace => "whitespace",
            TriviaKind::Comma => "comma",
            TriviaKind::Comment => "comment",
        }
    }
}

/// A run of skipped text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Trivia {
    /// What was skipped
    pub kind: TriviaKind,
    /// Scalar range of the skipped text
    pub span: Span,
}
