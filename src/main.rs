//! batchren - stage and apply bulk renames from the terminal.
//!
//! Usage:
//!   batchren            Browse the current directory
//!   batchren --help     Show help

use clap::Parser;
use color_eyre::eyre::{Context, Result};

#[derive(Parser)]
#[command(
    name = "batchren",
    version,
    about = "Browse a directory and stage bulk renames",
    long_about = "batchren lists the current directory and lets you stage renames one \
                  entry at a time or with a find/replace pattern, preview them, and \
                  apply them together.\n\n\
                  Keys: n rename, b bulk pattern, r apply, f filter, q quit."
)]
struct Cli {}

fn main() -> Result<()> {
    color_eyre::install()?;

    let Cli {} = Cli::parse();

    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    batchren_tui::run(cwd)?;

    Ok(())
}
