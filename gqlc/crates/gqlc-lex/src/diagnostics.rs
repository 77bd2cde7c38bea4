//! Lexical diagnostics.
//!
//! The lexer itself never fails: input it cannot scan ends up in a trailing
//! [`TokenKind::UnrecognizedInput`] token. This module turns that token into
//! a [`Diagnostic`](gqlc_util::Diagnostic) a person can act on, guessing what
//! went wrong from how the remainder starts.

use gqlc_util::diagnostic::{
    DiagnosticBuilder, DiagnosticCode, Handler, E_LEXER_INVALID_NUMBER, E_LEXER_INVALID_PUNCTUATOR,
    E_LEXER_UNRECOGNIZED_INPUT, E_LEXER_UNTERMINATED_BLOCK_STRING, E_LEXER_UNTERMINATED_STRING,
};
use gqlc_util::{Level, SourceFile, Span};
use tracing::debug;

use crate::chars::is_line_terminator;
use crate::token::{StringLiteral, Token, TokenKind};

struct Problem {
    code: DiagnosticCode,
    message: String,
    span: Span,
    label: &'static str,
    help: &'static str,
    note: Option<&'static str>,
}

/// Reports a trailing unrecognized remainder in `tokens` to `handler`.
///
/// Returns the number of diagnostics emitted: `1` if the last token is
/// [`TokenKind::UnrecognizedInput`], `0` otherwise.
///
/// # Example
///
/// ```
/// use gqlc_lex::{report_unrecognized, tokenize};
/// use gqlc_util::{Handler, SourceFile};
///
/// let source = "{ name(id: \"42) }";
/// let file = SourceFile::new("query.graphql", source);
/// let handler = Handler::new();
///
/// assert_eq!(report_unrecognized(&tokenize(source), &file, &handler), 1);
/// let diag = &handler.diagnostics()[0];
/// assert_eq!(diag.code.map(|c| c.to_string()), Some("E1002".to_string()));
/// ```
pub fn report_unrecognized(tokens: &[Token], file: &SourceFile, handler: &Handler) -> usize {
    report_unrecognized_as(Level::Error, tokens, file, handler)
}

/// Like [`report_unrecognized`], but reports at `level`.
///
/// Callers that tolerate unscannable input report it as a
/// [`Level::Warning`].
pub fn report_unrecognized_as(
    level: Level,
    tokens: &[Token],
    file: &SourceFile,
    handler: &Handler,
) -> usize {
    let Some((
        Token {
            kind: TokenKind::UnrecognizedInput(text),
            span,
        },
        scanned,
    )) = tokens.split_last()
    else {
        return 0;
    };

    let previous = scanned.last().filter(|t| t.span.end == span.start);
    let problem = classify(previous, text, *span);
    debug!(%level, code = %problem.code, span = %problem.span, "reporting unrecognized input");

    let mut builder = DiagnosticBuilder::new(level, problem.message)
        .code(problem.code)
        .span(problem.span)
        .help(problem.help);

    if let Some(note) = problem.note {
        builder = builder.note(note);
    }

    if let Ok(snippet) = file.snippet(problem.span, Some(problem.label)) {
        builder = builder.snippet(snippet);
    }

    let skipped = span.end.saturating_sub(problem.span.end);
    if skipped > 0 {
        builder = builder.note(format!(
            "lexing stopped here; the remaining {skipped} character(s) were not scanned"
        ));
    }

    builder.emit(handler);
    1
}

/// Works out what went wrong from how the remainder starts.
///
/// `previous` is the token that ends exactly where the remainder begins, if
/// any. An unterminated `"""` scans as the empty string `""` followed by a
/// remainder starting with `"`, so the two are reported together.
fn classify(previous: Option<&Token>, text: &str, span: Span) -> Problem {
    let scalars: Vec<char> = text.chars().collect();
    let prefix_span = |len: usize| Span::new(span.start, span.start + len);

    if text.starts_with('"') {
        if let Some(open) = previous.filter(|t| is_empty_single_quote(&t.kind)) {
            return Problem {
                code: E_LEXER_UNTERMINATED_BLOCK_STRING,
                message: "unterminated block string".into(),
                span: Span::new(open.span.start, span.end),
                label: "block string starts here",
                help: "close the block string with `\"\"\"`",
                note: None,
            };
        }

        let line_len = scalars
            .iter()
            .position(|&c| is_line_terminator(c))
            .unwrap_or(scalars.len());
        return Problem {
            code: E_LEXER_UNTERMINATED_STRING,
            message: "unterminated string".into(),
            span: prefix_span(line_len),
            label: "string is never closed",
            help: "close the string with `\"` before the end of the line, \
                   or use a block string `\"\"\"` for multi-line text",
            note: None,
        };
    }

    if text.starts_with('.') {
        let dots = scalars.iter().take_while(|&&c| c == '.').count();
        let after_number = previous
            .is_some_and(|t| matches!(t.kind, TokenKind::IntValue(_) | TokenKind::FloatValue(_)));
        return Problem {
            code: E_LEXER_INVALID_PUNCTUATOR,
            message: format!("invalid punctuator `{}`", ".".repeat(dots)),
            span: prefix_span(dots),
            label: "not a valid token",
            help: "a spread is written with exactly three dots: `...`",
            note: after_number
                .then_some("a number cannot end with `.`; write at least one digit after it, like `1.0`"),
        };
    }

    if text.starts_with('-') {
        return Problem {
            code: E_LEXER_INVALID_NUMBER,
            message: "invalid number".into(),
            span: prefix_span(1),
            label: "expected a digit after `-`",
            help: "a negative number is written as `-` followed directly by digits, like `-42`",
            note: None,
        };
    }

    let found = scalars.first().copied().unwrap_or_default();
    Problem {
        code: E_LEXER_UNRECOGNIZED_INPUT,
        message: format!("unexpected character {found:?}"),
        span: prefix_span(1),
        label: "unexpected character",
        help: "remove this character; GraphQL does not use it outside strings and comments",
        note: None,
    }
}

fn is_empty_single_quote(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::StringValue(StringLiteral::SingleQuote(body)) if body.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn report(source: &str) -> Option<gqlc_util::Diagnostic> {
        let file = SourceFile::new("test.graphql", source);
        let handler = Handler::new();
        let count = report_unrecognized(&tokenize(source), &file, &handler);
        assert_eq!(count, handler.error_count());
        handler.diagnostics().into_iter().next()
    }

    #[test]
    fn test_clean_input_reports_nothing() {
        assert!(report("query { hero { name } }").is_none());
        assert!(report("").is_none());
    }

    #[test]
    fn test_unterminated_block_string() {
        let diag = report("{ a(x: \"\"\"abc\n def) }").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_UNTERMINATED_BLOCK_STRING));
        assert_eq!(diag.span, Span::new(7, 21));
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn test_unterminated_block_string_at_end_of_input() {
        let diag = report("\"\"\"").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_UNTERMINATED_BLOCK_STRING));
        assert_eq!(diag.span, Span::new(0, 3));
    }

    #[test]
    fn test_empty_string_then_separate_quote_is_not_a_block_string() {
        let diag = report("\"\" \"abc").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diag.span, Span::new(3, 7));
    }

    #[test]
    fn test_unterminated_string() {
        let diag = report("{ a(x: \"abc\n) }").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diag.span, Span::new(7, 11));
        assert_eq!(diag.snippets[0].line, "{ a(x: \"abc");
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_double_dot() {
        let diag = report("{ ..Frag }").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_INVALID_PUNCTUATOR));
        assert_eq!(diag.message, "invalid punctuator `..`");
        assert_eq!(diag.span, Span::new(2, 4));
    }

    #[test]
    fn test_trailing_dot_after_number() {
        let diag = report("f(x: 1.) ").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_INVALID_PUNCTUATOR));
        assert_eq!(diag.span, Span::new(6, 7));
        assert!(diag.notes[0].contains("a number cannot end with `.`"));
        assert!(diag.notes[1].contains("remaining 2 character(s)"));
    }

    #[test]
    fn test_separated_dot_after_number_has_no_number_note() {
        let diag = report("f(x: 1 .)").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_INVALID_PUNCTUATOR));
        assert!(diag.notes.iter().all(|n| !n.contains("number")));
    }

    #[test]
    fn test_dangling_minus() {
        let diag = report("f(x: -abc)").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_INVALID_NUMBER));
        assert_eq!(diag.span, Span::new(5, 6));
    }

    #[test]
    fn test_unexpected_character() {
        let diag = report("a & b").expect("diagnostic");
        assert_eq!(diag.code, Some(E_LEXER_UNRECOGNIZED_INPUT));
        assert_eq!(diag.message, "unexpected character '&'");
        assert_eq!(diag.span, Span::new(2, 3));
    }

    #[test]
    fn test_report_as_warning() {
        let source = "a & b";
        let file = SourceFile::new("test.graphql", source);
        let handler = Handler::new();

        assert_eq!(report_unrecognized_as(Level::Warning, &tokenize(source), &file, &handler), 1);
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
        assert!(handler.diagnostics()[0].render(&file).starts_with("warning[E1001]"));
    }

    #[test]
    fn test_rendered_output() {
        let source = "{\n  a ..\n}";
        let file = SourceFile::new("q.graphql", source);
        let handler = Handler::new();
        report_unrecognized(&tokenize(source), &file, &handler);

        let rendered = handler.diagnostics()[0].render(&file);
        assert!(rendered.starts_with("error[E1005]: invalid punctuator `..`\n --> q.graphql:2:5\n"));
        assert!(rendered.contains("  2 |   a ..\n"));
        assert!(rendered.contains("^^ not a valid token"));
    }
}
