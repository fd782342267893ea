use clap::Parser;
use iconpack::cli::{Cli, Commands};
use iconpack::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => iconpack::cli::build::run(args, &printer)?,
        Commands::Atlas(args) => iconpack::cli::atlas::run(args, &printer)?,
        Commands::Init(args) => iconpack::cli::init::run(args, &printer)?,
        Commands::Completions(args) => iconpack::cli::completions::run(args)?,
    }

    Ok(())
}
