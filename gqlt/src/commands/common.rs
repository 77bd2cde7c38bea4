//! Common utilities for gqlt commands.

use std::io::Read;
use std::path::Path;

use gqlc_util::SourceFile;
use tracing::debug;

use crate::error::{GqltError, Result};

/// The path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a document from `path`, or from standard input when `path` is `-`.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        debug!(bytes = content.len(), "read document from stdin");
        return Ok(SourceFile::new("<stdin>", content));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GqltError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read document");
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Escape line breaks and tabs so a lexeme always prints on one line.
pub fn one_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
