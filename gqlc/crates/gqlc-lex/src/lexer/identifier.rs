//! Identifier lexing.

use crate::chars::{is_name_continue, is_name_start};
use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Recognizes a name.
///
/// Keywords such as `query` are not special here; they come out as plain
/// identifiers.
pub fn recognize_identifier(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    let start = cursor.position();
    cursor.eat_if(is_name_start)?;
    cursor.eat_while(is_name_continue);
    Some(TokenKind::Identifier(cursor.text_from(start)))
}
