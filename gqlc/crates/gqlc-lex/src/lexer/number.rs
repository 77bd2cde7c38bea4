//! Number literal lexing.
//!
//! GraphQL numbers are built from three parts:
//!
//! ```text
//! IntValue   = IntegerPart
//! FloatValue = IntegerPart FractionalPart
//!            | IntegerPart ExponentPart
//!            | IntegerPart FractionalPart ExponentPart
//!
//! IntegerPart    = "-"? ( "0" | [1-9] [0-9]* )
//! FractionalPart = "." [0-9]+
//! ExponentPart   = ( "e" | "E" ) ( "+" | "-" )? [0-9]+
//! ```
//!
//! Each part is matched inside [`Cursor::attempt`], so a part that fails
//! halfway consumes nothing. A `0` is a complete integer part on its own: in
//! `01` the `1` is left for the next token.

use crate::chars::{is_digit, is_nonzero_digit};
use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Recognizes an integer part followed by a fractional and/or exponent part.
pub fn recognize_float(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    cursor.attempt(|c| {
        let start = c.position();
        integer_part(c)?;
        let fraction = fractional_part(c).is_some();
        let exponent = exponent_part(c).is_some();
        (fraction || exponent).then(|| TokenKind::FloatValue(c.text_from(start)))
    })
}

/// Recognizes an integer part on its own.
pub fn recognize_int(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    let start = cursor.position();
    integer_part(cursor)?;
    Some(TokenKind::IntValue(cursor.text_from(start)))
}

fn integer_part(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.attempt(|c| {
        c.eat('-');
        if c.eat('0') {
            return Some(());
        }
        c.eat_if(is_nonzero_digit)?;
        c.eat_while(is_digit);
        Some(())
    })
}

fn fractional_part(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.attempt(|c| (c.eat('.') && c.eat_while(is_digit) > 0).then_some(()))
}

fn exponent_part(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.attempt(|c| {
        c.eat_if(|e| e == 'e' || e == 'E')?;
        c.eat_if(|s| s == '+' || s == '-');
        (c.eat_while(is_digit) > 0).then_some(())
    })
}
