//! Scalar cursor for traversing source text.
//!
//! This module provides the `Cursor` struct, a position within a borrowed
//! slice of Unicode scalars. It never owns or mutates the text: all state is
//! the current index, so taking a snapshot and restoring it is a plain copy.

/// A cursor over a sequence of Unicode scalars.
///
/// Recognizers consume scalars through the cursor and, when a multi-step
/// match fails partway through, restore an earlier snapshot so that a failed
/// attempt leaves no trace.
///
/// # Example
///
/// ```
/// use gqlc_lex::cursor::Cursor;
///
/// let chars: Vec<char> = "query".chars().collect();
/// let mut cursor = Cursor::new(&chars);
///
/// assert_eq!(cursor.peek(), Some('q'));
/// assert_eq!(cursor.advance(), Some('q'));
/// assert_eq!(cursor.peek(), Some('u'));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The full input.
    chars: &'a [char],

    /// Index of the next unconsumed scalar.
    position: usize,
}

/// A saved cursor position that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, position: 0 }
    }

    /// Returns the next scalar without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Returns the scalar `n` positions ahead (0 = next) without consuming.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.position + n).copied()
    }

    /// Returns the next `n` scalars, or `None` if fewer remain.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "\"\"\"x".chars().collect();
    /// let cursor = Cursor::new(&chars);
    /// assert_eq!(cursor.peek_prefix(3), Some(&['"', '"', '"'][..]));
    /// assert_eq!(cursor.peek_prefix(5), None);
    /// ```
    #[inline]
    pub fn peek_prefix(&self, n: usize) -> Option<&'a [char]> {
        self.remaining().get(..n)
    }

    /// Returns true if the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[char]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes and returns the next scalar.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    /// Consumes up to `n` scalars, returning how many were consumed.
    pub fn advance_n(&mut self, n: usize) -> usize {
        let count = n.min(self.chars.len() - self.position);
        self.position += count;
        count
    }

    /// Consumes the next scalar if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "-1".chars().collect();
    /// let mut cursor = Cursor::new(&chars);
    /// assert!(cursor.eat('-'));
    /// assert!(!cursor.eat('-'));
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        self.eat_if(|c| c == expected).is_some()
    }

    /// Consumes and returns the next scalar if it satisfies `predicate`.
    #[inline]
    pub fn eat_if(&mut self, predicate: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if predicate(c) => {
                self.position += 1;
                Some(c)
            },
            _ => None,
        }
    }

    /// Consumes scalars while `predicate` holds, returning how many were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.position;
        while self.eat_if(&mut predicate).is_some() {}
        self.position - start
    }

    /// Returns true if no input remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the index of the next unconsumed scalar.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full input.
    #[inline]
    pub fn source(&self) -> &'a [char] {
        self.chars
    }

    /// Returns the unconsumed input.
    #[inline]
    pub fn remaining(&self) -> &'a [char] {
        &self.chars[self.position..]
    }

    /// Returns the scalars from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [char] {
        &self.chars[start..self.position]
    }

    /// Returns the scalars from `start` up to the current position as a `String`.
    pub fn text_from(&self, start: usize) -> String {
        self.slice_from(start).iter().collect()
    }

    /// Saves the current position.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
        }
    }

    /// Rewinds to a previously saved position.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }

    /// Runs a multi-step match, rewinding if it returns `None`.
    ///
    /// Either `attempt` succeeds and keeps everything it consumed, or it
    /// fails and the cursor is exactly where it started.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "..x".chars().collect();
    /// let mut cursor = Cursor::new(&chars);
    ///
    /// let ellipsis = cursor.attempt(|c| (c.eat('.') && c.eat('.') && c.eat('.')).then_some(()));
    /// assert!(ellipsis.is_none());
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_none() {
            self.restore(snapshot);
        }
        result
    }
}
