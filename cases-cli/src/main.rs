//! Cases command-line entry point

use anyhow::Result;
use cases_cli::commands::Commands;
use clap::Parser;

/// Cases: convert text to AP-style title case, UPPERCASE or lowercase
#[derive(Debug, Parser)]
#[command(name = "cases", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
