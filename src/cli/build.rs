//! Build command implementation.
//!
//! Loads iconpack.yaml (or the defaults) and runs the full pipeline.

use std::path::PathBuf;

use clap::Args;

use crate::config::{AdvancementStyle, PackConfig};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::pipeline::generate;

/// Generate the resource pack from the input directory
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Base directory holding `input/` and iconpack.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/iconpack.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Override the configured advancement style
    #[arg(long, value_parser = parse_style)]
    pub style: Option<AdvancementStyle>,
}

fn parse_style(s: &str) -> std::result::Result<AdvancementStyle, String> {
    match s {
        "composite" => Ok(AdvancementStyle::Composite),
        "baked" => Ok(AdvancementStyle::Baked),
        _ => Err(format!("unknown style '{}', expected 'composite' or 'baked'", s)),
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PackConfig::load(path)?,
        None => PackConfig::discover(&args.root)?,
    };
    if let Some(style) = args.style {
        config.style = style;
    }

    let report = generate(&args.root, &config, printer)?;

    let warnings = printer.warning_count();
    let summary = format!(
        "{} in {}",
        plural(report.glyphs, "icon", "icons"),
        printer.path(&report.pack_root)
    );
    if warnings > 0 {
        printer.warning(
            "Finished",
            &format!("{} ({})", summary, plural(warnings, "warning", "warnings")),
        );
    } else {
        printer.status("Finished", &summary);
    }

    Ok(())
}
