//! String literal lexing.
//!
//! Two forms are recognized, block strings first:
//!
//! - `"""..."""` may span lines and ends at the first `"""`.
//! - `"..."` ends at the next `"` and may not contain a line terminator.
//!
//! Bodies are returned raw. Escape sequences are not decoded (a `\"` in a
//! single-quoted string still ends it) and block strings are not
//! re-indented.

use crate::chars::is_line_terminator;
use crate::cursor::Cursor;
use crate::token::{StringLiteral, TokenKind};

const BLOCK_QUOTE: [char; 3] = ['"', '"', '"'];

/// Recognizes a block or single-quoted string, trying the block form first.
///
/// An unterminated block string falls back to the single-quoted form, so
/// `"""abc` scans as the empty string `""` and leaves `"abc` behind.
pub fn recognize_string(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    block_string(cursor)
        .or_else(|| single_quote_string(cursor))
        .map(TokenKind::StringValue)
}

fn block_string(cursor: &mut Cursor<'_>) -> Option<StringLiteral> {
    cursor.attempt(|c| {
        if !c.starts_with(&BLOCK_QUOTE) {
            return None;
        }
        c.advance_n(BLOCK_QUOTE.len());
        let body_start = c.position();

        while !c.starts_with(&BLOCK_QUOTE) {
            c.advance()?;
        }

        let body = c.text_from(body_start);
        c.advance_n(BLOCK_QUOTE.len());
        Some(StringLiteral::BlockQuote(body))
    })
}

fn single_quote_string(cursor: &mut Cursor<'_>) -> Option<StringLiteral> {
    cursor.attempt(|c| {
        if !c.eat('"') {
            return None;
        }
        let body_start = c.position();
        c.eat_while(|ch| ch != '"' && !is_line_terminator(ch));
        let body = c.text_from(body_start);
        c.eat('"').then_some(StringLiteral::SingleQuote(body))
    })
}
