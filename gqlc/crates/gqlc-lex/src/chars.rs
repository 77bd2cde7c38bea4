//! Character classes for the GraphQL lexer.
//!
//! These are pure predicates over single scalars. Names accept any Unicode
//! letter; the only digits anywhere in the grammar are ASCII `0`-`9`.

/// The Unicode byte-order mark, ignored wherever it appears.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Checks if a character is insignificant whitespace.
///
/// Includes line terminators and the byte-order mark.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace(','));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Checks if a character ends a line (`\n` or `\r`).
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Checks if a character can start a name.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_name_start;
///
/// assert!(is_name_start('a'));
/// assert!(is_name_start('_'));
/// assert!(is_name_start('α'));
/// assert!(!is_name_start('1'));
/// assert!(!is_name_start('$'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue a name.
///
/// Other numeric scalars such as `²`, `½` or `٣` are not digits here.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_name_continue;
///
/// assert!(is_name_continue('9'));
/// assert!(is_name_continue('ß'));
/// assert!(!is_name_continue('²'));
/// ```
#[inline]
pub fn is_name_continue(c: char) -> bool {
    is_name_start(c) || is_digit(c)
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is an ASCII digit other than `0`.
#[inline]
pub fn is_nonzero_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}
