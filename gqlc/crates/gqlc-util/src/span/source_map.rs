//! Source files for computing source locations and diagnostic snippets.
//!
//! This module provides the [`SourceFile`] type, which pairs a document with
//! a display name and answers position and line queries about it.

use std::sync::Arc;

use super::{LineCol, Span};
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// A source document with its display name
///
/// # Examples
///
/// ```
/// use gqlc_util::span::SourceFile;
///
/// let file = SourceFile::new("query.graphql", "{ hero }");
/// assert_eq!(file.name(), "query.graphql");
/// assert_eq!(file.len(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Number of scalars in `content`
    len: usize,
    /// Byte ranges of each line, terminators excluded
    lines: Arc<[(usize, usize)]>,
    /// Scalar index where each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let (lines, line_starts, len) = Self::index_lines(&content);
        Self {
            name: name.into(),
            content,
            len,
            lines,
            line_starts,
        }
    }

    /// Compute the byte range and starting scalar index of every line.
    ///
    /// Uses the same line terminators as [`position_of`](super::position_of):
    /// in `\r\n` the line starts after the `\n`.
    fn index_lines(content: &str) -> (Arc<[(usize, usize)]>, Arc<[usize]>, usize) {
        let mut ranges = Vec::new();
        let mut starts = vec![0];
        let mut start = 0;
        let mut scalars = 0;
        let mut chars = content.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            scalars += 1;
            match c {
                '\n' => {
                    ranges.push((start, i));
                    start = i + 1;
                },
                '\r' => {
                    ranges.push((start, i));
                    start = i + 1;
                    if let Some(&(j, '\n')) = chars.peek() {
                        chars.next();
                        scalars += 1;
                        start = j + 1;
                    }
                },
                _ => continue,
            }
            starts.push(scalars);
        }
        ranges.push((start, content.len()));

        (ranges.into(), starts.into(), scalars)
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of Unicode scalars in the file
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the file has no content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert a scalar index to a 1-based (line, column) position
    ///
    /// Agrees with [`position_of`](super::position_of) but looks the line up
    /// in a table built once per file, so mapping every token of a document
    /// stays linear. Indices past the end clamp to the end of the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::span::{LineCol, SourceFile};
    ///
    /// let file = SourceFile::new("a.graphql", "ab\r\ncd\ref");
    /// assert_eq!(file.position(3), LineCol::new(1, 4));
    /// assert_eq!(file.position(5), LineCol::new(2, 2));
    /// assert_eq!(file.position(7), LineCol::new(3, 1));
    /// assert_eq!(file.position(99), LineCol::new(3, 3));
    /// ```
    pub fn position(&self, index: usize) -> LineCol {
        let index = index.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= index);
        let line_start = self.line_starts[line - 1];
        LineCol::new(line, index - line_start + 1)
    }

    /// Like [`SourceFile::position`], but rejects indices past the end.
    ///
    /// The end-of-file index (`len()`) is accepted.
    pub fn checked_position(&self, index: usize) -> SourceMapResult<LineCol> {
        if index > self.len {
            return Err(SourceMapError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.position(index))
    }

    /// Get the text of a 1-based line, without its terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.graphql", "line1\r\nline2");
    /// assert_eq!(file.line_text(2).unwrap(), "line2");
    /// assert!(file.line_text(3).is_err());
    /// ```
    pub fn line_text(&self, line: usize) -> SourceMapResult<&str> {
        let &(start, end) = line
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .ok_or(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.lines.len(),
            })?;
        Ok(&self.content[start..end])
    }

    /// Build a snippet underlining `span` on the line where it starts.
    ///
    /// A span that continues past the end of its first line is underlined
    /// up to the end of that line. Empty spans get a single caret.
    pub fn snippet(&self, span: Span, label: Option<&str>) -> SourceMapResult<SourceSnippet> {
        self.check_span(span)?;

        let start = self.position(span.start);
        let end = self.position(span.end);
        let text = self.line_text(start.line)?;

        let end_column = if end.line == start.line {
            end.column
        } else {
            text.chars().count() + 1
        };

        Ok(SourceSnippet::new(
            text,
            start.line,
            start.column,
            end_column.max(start.column + 1),
            label,
        ))
    }

    fn check_span(&self, span: Span) -> SourceMapResult<()> {
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.len {
            return Err(SourceMapError::IndexOutOfBounds {
                index: span.end,
                len: self.len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::position_of;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_source_file_basics() {
        let file = SourceFile::new("q.graphql", "{ héro }");
        assert_eq!(file.name(), "q.graphql");
        assert_eq!(file.content(), "{ héro }");
        assert_eq!(file.len(), 8);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_lines_with_mixed_terminators() {
        let file = SourceFile::new("q.graphql", "a\nb\r\nc\rd");
        assert_eq!(file.line_text(1).unwrap(), "a");
        assert_eq!(file.line_text(2).unwrap(), "b");
        assert_eq!(file.line_text(3).unwrap(), "c");
        assert_eq!(file.line_text(4).unwrap(), "d");
        assert!(file.line_text(5).is_err());
    }

    #[test]
    fn test_trailing_newline_starts_empty_line() {
        let file = SourceFile::new("q.graphql", "a\n");
        assert_eq!(file.line_text(2).unwrap(), "");
        assert_eq!(file.position(2), LineCol::new(2, 1));
    }

    #[test]
    fn test_line_text_zero_is_invalid() {
        let file = SourceFile::new("q.graphql", "a");
        assert_eq!(
            file.line_text(0),
            Err(SourceMapError::InvalidLineNumber { line: 0, max_lines: 1 })
        );
    }

    #[test]
    fn test_checked_position() {
        let file = SourceFile::new("q.graphql", "ab\ncd");
        assert_eq!(file.checked_position(3), Ok(LineCol::new(2, 1)));
        assert_eq!(file.checked_position(5), Ok(LineCol::new(2, 3)));
        assert_eq!(
            file.checked_position(6),
            Err(SourceMapError::IndexOutOfBounds { index: 6, len: 5 })
        );
    }

    #[test]
    fn test_position_matches_position_of() {
        let content = "query {\r\n  héro\r  🎉\n\n}\r";
        let file = SourceFile::new("q.graphql", content);
        for index in 0..=file.len() + 2 {
            assert_eq!(file.position(index), position_of(index, content), "index {index}");
        }
    }

    #[test]
    fn test_position_on_large_input() {
        let content = "a\n".repeat(200_000);
        let file = SourceFile::new("big.graphql", content.as_str());
        assert_eq!(file.position(0), LineCol::new(1, 1));
        assert_eq!(file.position(399_999), LineCol::new(200_000, 2));
        assert_eq!(file.position(400_000), LineCol::new(200_001, 1));
    }

    #[quickcheck]
    fn prop_position_matches_position_of(content: String, index: usize) -> bool {
        let file = SourceFile::new("q.graphql", content.as_str());
        let index = index % (file.len() + 2);
        file.position(index) == position_of(index, &content)
    }

    #[test]
    fn test_snippet_single_line() {
        let file = SourceFile::new("q.graphql", "query {\n  a ..\n}");
        let snippet = file.snippet(Span::new(12, 14), Some("here")).unwrap();
        assert_eq!(snippet.line, "  a ..");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 5);
        assert_eq!(snippet.end_column, 7);
        assert_eq!(snippet.label.as_deref(), Some("here"));
    }

    #[test]
    fn test_snippet_multi_line_clamps_to_first_line() {
        let file = SourceFile::new("q.graphql", "x \"abc\ndef");
        let snippet = file.snippet(Span::new(2, 10), None).unwrap();
        assert_eq!(snippet.line, "x \"abc");
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 7);
    }

    #[test]
    fn test_snippet_empty_span_has_one_caret() {
        let file = SourceFile::new("q.graphql", "abc");
        let snippet = file.snippet(Span::point(3), None).unwrap();
        assert_eq!(snippet.start_column, 4);
        assert_eq!(snippet.end_column, 5);
    }
}
