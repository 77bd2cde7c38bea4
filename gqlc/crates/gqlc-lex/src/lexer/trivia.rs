//! Trivia skipping.
//!
//! This module handles skipping whitespace, commas and `#` line comments.

use gqlc_util::Span;

use super::Lexer;
use crate::chars::{is_line_terminator, is_whitespace};
use crate::token::{Trivia, TriviaKind};

impl<'a> Lexer<'a> {
    /// Skips whitespace, commas and comments.
    ///
    /// Called before every token attempt, since trivia may appear between
    /// any two tokens. A comment runs up to, but not including, the next line
    /// terminator; the terminator is then skipped as whitespace.
    pub(super) fn skip_trivia(&mut self) {
        loop {
            let start = self.cursor.position();

            let kind = if self.cursor.eat_while(is_whitespace) > 0 {
                TriviaKind::Whitespace
            } else if self.cursor.eat(',') {
                TriviaKind::Comma
            } else if self.cursor.eat('#') {
                self.cursor.eat_while(|c| !is_line_terminator(c));
                TriviaKind::Comment
            } else {
                return;
            };

            if let Some(record) = self.trivia.as_mut() {
                record.push(Trivia {
                    kind,
                    span: Span::new(start, self.cursor.position()),
                });
            }
        }
    }
}
