//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! scalar ranges, plus the position mapper that turns a scalar index into a
//! human-readable line and column.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::span::{position_of, LineCol, Span};
//!
//! let span = Span::new(6, 10);
//! assert_eq!(span.len(), 4);
//!
//! let pos = position_of(span.start, "query\n{ a }");
//! assert_eq!(pos, LineCol::new(2, 1));
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;

/// Source location span
///
/// A `Span` is a half-open range `[start, end)` of Unicode scalar indices
/// into the original input.
///
/// # Examples
///
/// ```
/// use gqlc_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert_eq!(span.len(), 10);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start scalar index (inclusive)
    pub start: usize,
    /// End scalar index (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span at a single index
    #[inline]
    pub const fn point(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in scalars
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::span::Span;
    ///
    /// assert_eq!(Span::new(10, 20).len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-based line and column pair
///
/// Columns count scalars from the start of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in scalars)
    pub column: usize,
}

impl LineCol {
    /// The position of the first scalar of any input
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Map a scalar index into `source` to its 1-based line and column.
///
/// The scan always starts from the beginning of `source`; nothing is cached
/// between calls. `\n`, `\r\n` and a lone `\r` each end a line. An index past
/// the end maps to the position just after the last scalar.
///
/// # Examples
///
/// ```
/// use gqlc_util::span::{position_of, LineCol};
///
/// assert_eq!(position_of(0, "abc"), LineCol::new(1, 1));
/// assert_eq!(position_of(2, "abc"), LineCol::new(1, 3));
/// assert_eq!(position_of(4, "ab\ncd"), LineCol::new(2, 2));
/// assert_eq!(position_of(3, "a\r\nb"), LineCol::new(2, 1));
/// ```
pub fn position_of(index: usize, source: &str) -> LineCol {
    let mut pos = LineCol::START;
    let mut chars = source.chars().peekable();

    for _ in 0..index {
        let Some(c) = chars.next() else {
            break;
        };
        let ends_line = c == '\n' || (c == '\r' && chars.peek() != Some(&'\n'));
        if ends_line {
            pos.line += 1;
            pos.column = 1;
        } else {
            pos.column += 1;
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(7);
        assert!(span.is_empty());
        assert_eq!(span.start, 7);
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(10, 20).len(), 10);
        assert_eq!(Span::DUMMY.len(), 0);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(3, 8).to_string(), "3..8");
    }

    #[test]
    fn test_position_start_of_input() {
        assert_eq!(position_of(0, ""), LineCol::START);
        assert_eq!(position_of(0, "query"), LineCol::START);
    }

    #[test]
    fn test_position_after_newline() {
        let source = "query {\n  name\n}";
        assert_eq!(position_of(7, source), LineCol::new(1, 8));
        assert_eq!(position_of(8, source), LineCol::new(2, 1));
        assert_eq!(position_of(10, source), LineCol::new(2, 3));
        assert_eq!(position_of(15, source), LineCol::new(3, 1));
    }

    #[test]
    fn test_position_counts_scalars_not_bytes() {
        // 'é' and '🎉' are single scalars.
        let source = "é🎉x";
        assert_eq!(position_of(2, source), LineCol::new(1, 3));
    }

    #[test]
    fn test_position_crlf_is_one_line_break() {
        let source = "a\r\nb";
        assert_eq!(position_of(1, source), LineCol::new(1, 2));
        assert_eq!(position_of(2, source), LineCol::new(1, 3));
        assert_eq!(position_of(3, source), LineCol::new(2, 1));
    }

    #[test]
    fn test_position_lone_cr_breaks_line() {
        assert_eq!(position_of(2, "a\rb"), LineCol::new(2, 1));
    }

    #[test]
    fn test_position_past_end() {
        assert_eq!(position_of(100, "ab\nc"), LineCol::new(2, 2));
    }

    #[test]
    fn test_line_col_display() {
        assert_eq!(LineCol::new(4, 9).to_string(), "4:9");
    }

    #[quickcheck]
    fn prop_single_line_column_is_index_plus_one(text: String, index: usize) -> bool {
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let len = line.chars().count();
        let index = if len == 0 { 0 } else { index % (len + 1) };
        position_of(index, &line) == LineCol::new(1, index + 1)
    }

    #[quickcheck]
    fn prop_line_is_one_plus_newlines_before(text: String, index: usize) -> bool {
        let text: String = text.chars().filter(|c| *c != '\r').collect();
        let len = text.chars().count();
        let index = if len == 0 { 0 } else { index % (len + 1) };
        let newlines = text.chars().take(index).filter(|c| *c == '\n').count();
        position_of(index, &text).line == newlines + 1
    }

    #[quickcheck]
    fn prop_position_is_monotonic(text: String, a: usize, b: usize) -> bool {
        let len = text.chars().count() + 1;
        let (a, b) = (a % len, b % len);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        position_of(lo, &text) <= position_of(hi, &text)
    }
}
