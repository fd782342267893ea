pub mod atlas;
pub mod build;
pub mod completions;
pub mod init;

use clap::{Parser, Subcommand};

/// iconpack - Minecraft item icon resource pack generator
#[derive(Parser, Debug)]
#[command(name = "iconpack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the resource pack from the input directory
    Build(build::BuildArgs),

    /// Extract item sprite mappings from an items atlas dump
    Atlas(atlas::AtlasArgs),

    /// Write a default iconpack.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
