//! Tokens command implementation.
//!
//! Lists the tokens of a document, optionally interleaved with the trivia
//! skipped between them, as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use gqlc_lex::{tokenize, tokenize_with_trivia};
use gqlc_util::{SourceFile, Span};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{one_line, read_source};
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Document to read, or `-` for stdin.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Include trivia in the listing.
    pub trivia: bool,
}

/// One listed token or trivia run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Category name, such as `identifier`, `punctuator` or `comment`.
    pub kind: &'static str,
    /// Exact source text.
    pub text: String,
    /// First scalar index.
    pub start: usize,
    /// One past the last scalar index.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based column of `start`.
    pub column: usize,
}

impl TokenRecord {
    fn new(file: &SourceFile, kind: &'static str, text: String, span: Span) -> Self {
        let pos = file.position(span.start);
        Self {
            kind,
            text,
            start: span.start,
            end: span.end,
            line: pos.line,
            column: pos.column,
        }
    }
}

/// Execute the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let file = read_source(&args.input)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tokens(&file, args.format, args.trivia, &mut out)
}

/// Tokenize `file` and write the listing to `out`.
pub fn write_tokens(
    file: &SourceFile,
    format: OutputFormat,
    trivia: bool,
    out: &mut impl Write,
) -> Result<()> {
    let records = collect_records(file, trivia);
    debug!(records = records.len(), ?format, "writing token listing");

    match format {
        OutputFormat::Text => {
            for record in &records {
                writeln!(
                    out,
                    "{}:{} {} {}",
                    record.line,
                    record.column,
                    record.kind,
                    one_line(&record.text)
                )?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }

    Ok(())
}

/// Build the listing for `file`, in source order.
pub fn collect_records(file: &SourceFile, trivia: bool) -> Vec<TokenRecord> {
    if !trivia {
        return tokenize(file.content())
            .into_iter()
            .map(|t| TokenRecord::new(file, t.kind.name(), t.kind.lexeme().into_owned(), t.span))
            .collect();
    }

    let chars: Vec<char> = file.content().chars().collect();
    let (tokens, trivia) = tokenize_with_trivia(file.content());

    let mut records: Vec<TokenRecord> = tokens
        .into_iter()
        .map(|t| TokenRecord::new(file, t.kind.name(), t.kind.lexeme().into_owned(), t.span))
        .chain(trivia.into_iter().map(|t| {
            let text = chars[t.span.start..t.span.end].iter().collect();
            TokenRecord::new(file, t.kind.name(), text, t.span)
        }))
        .collect();
    records.sort_by_key(|r| r.start);
    records
}
