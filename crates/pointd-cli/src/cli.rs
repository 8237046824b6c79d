use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pointd",
    version,
    about = "Scorekeeper for two-player tabletop wargames"
)]
pub struct Args {
    /// Do not print engine events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Print every evaluation and band lookup.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Scorekeeper configuration (TOML, or YAML with a .yaml/.yml extension).
    #[arg(long, short, global = true, env = "POINTD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate arithmetic expressions.
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },
    /// Score a finished game.
    Score(ScoreArgs),
    /// Print the margin to match points lookup table.
    Table,
}

/// Every field accepts an arithmetic expression.
#[derive(Debug, ClapArgs)]
pub struct ScoreArgs {
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub major_a: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub minor_a: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub major_b: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub minor_b: String,
    /// Defaults to the configured total.
    #[arg(long, default_value = "")]
    pub major_total: String,
    /// Defaults to the configured total.
    #[arg(long, default_value = "")]
    pub minor_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eval() {
        let args = Args::try_parse_from(["pointd", "eval", "12+8*2", "(2+3)*4"]).unwrap();
        match args.command {
            Command::Eval { expressions } => assert_eq!(expressions, vec!["12+8*2", "(2+3)*4"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_eval_requires_an_expression() {
        assert!(Args::try_parse_from(["pointd", "eval"]).is_err());
    }

    #[test]
    fn test_eval_accepts_leading_minus() {
        let args = Args::try_parse_from(["pointd", "eval", "-5+10", "2-1"]).unwrap();
        match args.command {
            Command::Eval { expressions } => assert_eq!(expressions, vec!["-5+10", "2-1"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_score_with_defaults() {
        let args = Args::try_parse_from([
            "pointd", "score", "--major-a", "1", "--minor-a", "400+200", "--quiet",
        ])
        .unwrap();
        assert!(args.quiet);
        match args.command {
            Command::Score(score) => {
                assert_eq!(score.major_a, "1");
                assert_eq!(score.minor_a, "400+200");
                assert_eq!(score.major_b, "");
                assert_eq!(score.minor_total, "");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let args = Args::try_parse_from(["pointd", "table", "--config", "club.yaml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("club.yaml")));
        assert!(matches!(args.command, Command::Table));
    }
}
