//! Position command implementation.

use std::path::PathBuf;

use gqlc_util::{LineCol, SourceFile};

use crate::commands::common::read_source;
use crate::error::Result;

/// Arguments for the position command.
#[derive(Debug, Clone)]
pub struct PositionArgs {
    /// Document to read, or `-` for stdin.
    pub input: PathBuf,
    /// Scalar index to locate.
    pub index: usize,
}

/// Execute the position command, printing `line:column`.
pub fn run_position(args: PositionArgs) -> Result<()> {
    let file = read_source(&args.input)?;
    println!("{}", locate(&file, args.index)?);
    Ok(())
}

/// Map a scalar index to its 1-based line and column.
///
/// The end-of-file index is accepted; anything past it is an error.
pub fn locate(file: &SourceFile, index: usize) -> Result<LineCol> {
    Ok(file.checked_position(index)?)
}
