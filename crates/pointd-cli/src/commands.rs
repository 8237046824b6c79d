use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use pointd::{ConfigError, ScoreFields, Scorekeeper, ScorekeeperConfig, Side};

use crate::cli::ScoreArgs;

/// Configuration read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "pointd.toml";

/// Loads the configuration at `path`, or `default_path` when none is given.
///
/// Only a missing default file falls back to the built-in configuration;
/// a default file that exists but does not parse is an error.
pub fn load_config(path: Option<&Path>, default_path: &Path) -> Result<ScorekeeperConfig> {
    let Some(path) = path else {
        return match ScorekeeperConfig::load(default_path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(ScorekeeperConfig::default())
            }
            config => config.with_context(|| format!("loading {}", default_path.display())),
        };
    };

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let config = if is_yaml {
        ScorekeeperConfig::from_yaml_file(path)
    } else {
        ScorekeeperConfig::from_toml_file(path)
    };
    config.with_context(|| format!("loading {}", path.display()))
}

// Prints each result; fails if any expression failed.
pub fn eval(keeper: &mut Scorekeeper, expressions: &[String]) -> Result<()> {
    let mut failures = 0;
    for expression in expressions {
        keeper.clear();
        match keeper.parse(expression) {
            Ok(value) => println!("{} = {}", expression, value),
            Err(err) => {
                failures += 1;
                println!("{} : {}", expression, err);
            }
        }
        if let Some(warning) = keeper.warning() {
            println!("  warning: {}", warning);
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} expressions failed", failures, expressions.len());
    }
    Ok(())
}

pub fn score(keeper: &mut Scorekeeper, args: &ScoreArgs) -> Result<()> {
    let card = keeper.score_fields(&ScoreFields {
        major_a: &args.major_a,
        minor_a: &args.minor_a,
        major_b: &args.major_b,
        minor_b: &args.minor_b,
        major_total: &args.major_total,
        minor_total: &args.minor_total,
    });

    println!("Winner:    {}", card.winner_label().unwrap_or("draw"));
    println!("Win ratio: {}", card.margin_text());
    for side in [Side::A, Side::B] {
        println!(
            "{:<10} {}",
            format!("{}:", card.label(side)),
            card.points(side)
        );
    }
    if let Some(status) = card.status() {
        println!("Status:    {}", status);
    }
    Ok(())
}

pub fn table(keeper: &Scorekeeper) -> Result<()> {
    for line in keeper.lookup_table() {
        println!("{}", line);
    }
    Ok(())
}
