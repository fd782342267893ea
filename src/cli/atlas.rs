//! Atlas command implementation.
//!
//! To get the input, press F3+S in game and copy
//! `screenshots/debug/minecraft_textures_atlas_items.png.txt` into `input/`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::PackConfig;
use crate::error::Result;
use crate::output::Printer;
use crate::pipeline::generate_atlas_mappings;

/// Extract item sprite mappings from an items atlas dump
#[derive(Args, Debug)]
pub struct AtlasArgs {
    /// Base directory holding `input/` and iconpack.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Also print the mappings as Java `sprites.put(...)` lines on stdout
    #[arg(long)]
    pub java: bool,
}

pub fn run(args: AtlasArgs, printer: &Printer) -> Result<()> {
    let config = PackConfig::discover(&args.root)?;
    let mapping = generate_atlas_mappings(&args.root, &config, printer)?;

    if args.java {
        let mut stdout = io::stdout().lock();
        for line in mapping.java_hashmap_lines() {
            writeln!(stdout, "{}", line)?;
        }
    }

    Ok(())
}
