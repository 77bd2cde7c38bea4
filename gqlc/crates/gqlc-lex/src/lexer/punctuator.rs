//! Punctuator lexing.

use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Recognizes a single punctuator.
///
/// Every punctuator is one scalar except `...`. One or two dots are not a
/// token and are left unconsumed.
pub fn recognize_punctuator(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    let kind = match cursor.peek()? {
        '!' => TokenKind::Bang,
        '$' => TokenKind::Dollar,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        ':' => TokenKind::Colon,
        '=' => TokenKind::Eq,
        '@' => TokenKind::At,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '|' => TokenKind::Pipe,
        '.' => return recognize_ellipsis(cursor),
        _ => return None,
    };
    cursor.advance();
    Some(kind)
}

fn recognize_ellipsis(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    cursor.attempt(|c| (c.eat('.') && c.eat('.') && c.eat('.')).then_some(TokenKind::Ellipsis))
}
