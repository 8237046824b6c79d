//! Point'd - a scorekeeper for two-player tabletop wargames
//!
//! Type each side's major (victory) and minor (kill) points, possibly as
//! arithmetic such as `150+75`, and get the winner, the percentage margin
//! and the match points from the scoring table.
//!
//! # Example
//!
//! ```rust
//! use pointd::prelude::*;
//!
//! let mut keeper = Scorekeeper::default();
//! let card = keeper.score_fields(&ScoreFields {
//!     major_a: "1",
//!     minor_a: "400+200",
//!     major_b: "0",
//!     minor_b: "",
//!     ..ScoreFields::default()
//! });
//!
//! assert_eq!(card.winner_label(), Some("A"));
//! assert_eq!(card.margin_text(), "200%");
//! assert_eq!(card.points(Side::A), 20);
//! ```

// Expression engine
pub use pointd_core::{
    evaluate, parse, to_postfix, tokenize, ArityError, Engine, EngineError, Token, TokenKind,
    Warning, Warnings,
};

// Scoring
pub use pointd_scoring::{
    determine_winner, GameResult, MatchScore, ScoreBand, Scorer, ScoringTable, Side, SidePoints,
    TableError, Totals,
};

// Configuration
pub use pointd_config::{BandConfig, ConfigError, PlayersConfig, ScorekeeperConfig};

#[cfg(feature = "console")]
pub use pointd_console as console;

mod scorekeeper;
pub use scorekeeper::{ScoreFields, Scorecard, Scorekeeper};

pub mod prelude {
    pub use super::{parse, Engine, EngineError, Warning};
    pub use super::{GameResult, MatchScore, Scorer, ScoringTable, Side, SidePoints, Totals};
    pub use super::{ScoreFields, Scorecard, Scorekeeper, ScorekeeperConfig};
}
