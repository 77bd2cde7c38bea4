//! Check command implementation.
//!
//! Tokenizes a document and reports unrecognized input as a rendered
//! diagnostic.

use std::io::Write;
use std::path::PathBuf;

use gqlc_lex::{report_unrecognized_as, tokenize};
use gqlc_util::{Handler, Level, SourceFile};
use tracing::{debug, info};

use crate::commands::common::read_source;
use crate::error::{GqltError, Result};

const RED_BOLD: &str = "\x1b[1;31m";
const YELLOW_BOLD: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Document to read, or `-` for stdin.
    pub input: PathBuf,
    /// Fail when the document has unrecognized input. Otherwise it is
    /// reported as a warning.
    pub fail_on_unrecognized: bool,
    /// Highlight diagnostic headers.
    pub color: bool,
}

/// Outcome of checking one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of tokens, including an unrecognized remainder.
    pub tokens: usize,
    /// Number of errors reported.
    pub errors: usize,
    /// Number of warnings reported.
    pub warnings: usize,
}

/// Execute the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let file = read_source(&args.input)?;
    let level = if args.fail_on_unrecognized {
        Level::Error
    } else {
        Level::Warning
    };

    let summary = {
        let stderr = std::io::stderr();
        let mut err = stderr.lock();
        check_source(&file, level, args.color, &mut err)?
    };

    if summary.errors > 0 {
        return Err(GqltError::Lex(format!(
            "{}: {} error(s)",
            file.name(),
            summary.errors
        )));
    }

    if summary.warnings == 0 {
        println!("ok: {} tokens", summary.tokens);
    } else {
        println!("{} tokens, {} warning(s)", summary.tokens, summary.warnings);
    }
    Ok(())
}

/// Tokenize `file`, reporting unrecognized input at `level` to `err`.
pub fn check_source(
    file: &SourceFile,
    level: Level,
    color: bool,
    err: &mut impl Write,
) -> Result<CheckSummary> {
    let tokens = tokenize(file.content());
    let handler = Handler::new();
    report_unrecognized_as(level, &tokens, file, &handler);

    for diagnostic in handler.diagnostics() {
        let rendered = diagnostic.render(file);
        if color {
            write!(err, "{}", paint_header(diagnostic.level, &rendered))?;
        } else {
            write!(err, "{}", rendered)?;
        }
    }

    let summary = CheckSummary {
        tokens: tokens.len(),
        errors: handler.error_count(),
        warnings: handler.warning_count(),
    };
    if summary.errors + summary.warnings == 0 {
        info!(file = file.name(), tokens = summary.tokens, "document is lexically valid");
    } else {
        debug!(
            file = file.name(),
            errors = summary.errors,
            warnings = summary.warnings,
            "document has unrecognized input"
        );
    }
    Ok(summary)
}

fn paint_header(level: Level, rendered: &str) -> String {
    let style = match level {
        Level::Error => RED_BOLD,
        Level::Warning => YELLOW_BOLD,
    };
    match rendered.split_once('\n') {
        Some((header, rest)) => format!("{style}{header}{RESET}\n{rest}"),
        None => format!("{style}{rendered}{RESET}"),
    }
}
