//! Init command implementation.
//!
//! Writes an `iconpack.yaml` holding the default configuration, as a
//! starting point for a customised pack.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{PackConfig, CONFIG_FILENAME};
use crate::error::{PackError, Result};
use crate::output::Printer;

/// Write a default iconpack.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Base directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing iconpack.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(PackError::Build {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&PackConfig::default()).map_err(|e| PackError::Build {
        message: format!("Failed to serialize config: {}", e),
        help: None,
    })?;

    fs::write(&config_path, yaml)
        .map_err(|e| PackError::io(&config_path, "Failed to write config", e))?;

    printer.status("Created", &printer.path(&config_path));
    Ok(())
}
