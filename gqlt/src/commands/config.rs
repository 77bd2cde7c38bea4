//! Config command implementation.
//!
//! Prints the effective configuration, or writes it to a file as a starting
//! point for a `gqlt.toml`.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::{GqltError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Execute the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.write {
        Some(path) => {
            config.save_to_path(&path)?;
            info!(path = %path.display(), "configuration written");
            println!("wrote {}", path.display());
        },
        None => print!("{}", render_config(config)?),
    }
    Ok(())
}

/// Render `config` as TOML.
pub fn render_config(config: &Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| GqltError::Config(format!("Failed to serialize configuration: {}", e)))
}
