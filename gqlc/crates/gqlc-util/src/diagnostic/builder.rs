//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with highlighting
/// of the specific column range.
///
/// # Examples
///
/// ```
/// use gqlc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("{ a .. }", 1, 5, 7, Some("expected `...`"));
/// assert_eq!(snippet.format(), "  1 | { a .. }\n    |     ^^ expected `...`");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, and a second line
    /// with carets (^) under the highlighted range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line, width = width);

        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use gqlc_util::diagnostic::{DiagnosticBuilder, Handler};
/// use gqlc_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unterminated string literal")
///     .span(Span::new(4, 9))
///     .help("add a closing `\"`")
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_format() {
        let snippet = SourceSnippet::new("query { a }", 12, 9, 10, None::<String>);
        assert_eq!(snippet.format(), " 12 | query { a }\n    |         ^");
    }

    #[test]
    fn test_snippet_with_label() {
        let snippet = SourceSnippet::new("x", 1, 1, 2, None::<String>).with_label("here");
        assert!(snippet.format().ends_with("^ here"));
    }

    #[test]
    fn test_snippet_degenerate_range_gets_one_caret() {
        let snippet = SourceSnippet::new("abc", 1, 3, 3, None::<String>);
        assert!(snippet.format().ends_with("  ^"));
    }

    #[test]
    fn test_builder_build() {
        let diag = DiagnosticBuilder::new(Level::Warning, "odd")
            .code(DiagnosticCode::new("W", 1))
            .span(Span::new(1, 2))
            .note("a note")
            .help("a help")
            .build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.message, "odd");
        assert_eq!(diag.span, Span::new(1, 2));
        assert_eq!(diag.code, Some(DiagnosticCode::new("W", 1)));
        assert_eq!(diag.notes, vec!["a note"]);
        assert_eq!(diag.helps, vec!["a help"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("boom").emit(&handler);
        assert!(handler.has_errors());
    }
}
