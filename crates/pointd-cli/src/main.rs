use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pointd::console::LevelFilter;
use pointd::Scorekeeper;

mod cli;
mod commands;

use cli::{Args, Command};
use commands::DEFAULT_CONFIG;

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        let level = if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        pointd::console::init_with_level(level);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "pointd starting");

    let config = commands::load_config(args.config.as_deref(), Path::new(DEFAULT_CONFIG))?;
    let mut keeper = Scorekeeper::new(config).context("building scoring table")?;

    match args.command {
        Command::Eval { expressions } => commands::eval(&mut keeper, &expressions),
        Command::Score(score_args) => commands::score(&mut keeper, &score_args),
        Command::Table => commands::table(&keeper),
    }
}
