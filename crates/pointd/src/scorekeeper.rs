//! Scorekeeper session: raw text fields in, scorecard out.
//!
//! Logging levels:
//! - **INFO**: Finished scorecards
//! - **ERROR**: Fields whose expression could not be evaluated

use pointd_config::{ConfigError, PlayersConfig, ScorekeeperConfig};
use pointd_core::{Engine, EngineError, Warning};
use pointd_scoring::{GameResult, MatchScore, Scorer, Side, SidePoints, Totals};
use tracing::{error, info};

/// The six points fields of a score entry form, as typed.
///
/// Blank totals fall back to the configured totals; any other blank
/// field counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreFields<'a> {
    pub major_a: &'a str,
    pub minor_a: &'a str,
    pub major_b: &'a str,
    pub minor_b: &'a str,
    pub major_total: &'a str,
    pub minor_total: &'a str,
}

/// Everything a score screen shows after scoring a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    game: GameResult,
    score: MatchScore,
    players: PlayersConfig,
    status: Option<String>,
}

impl Scorecard {
    /// The game as read from the fields.
    pub fn game(&self) -> &GameResult {
        &self.game
    }

    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::A => &self.players.a,
            Side::B => &self.players.b,
        }
    }

    /// Label of the winning side, `None` for a draw.
    pub fn winner_label(&self) -> Option<&str> {
        self.score.winner().map(|side| self.label(side))
    }

    pub fn points(&self, side: Side) -> u32 {
        self.score.points(side)
    }

    /// The winner's margin as shown to players, cut to three decimals,
    /// e.g. `"90%"` or `"16.666%"`.
    pub fn margin_text(&self) -> String {
        let margin = self.score.margin();
        let shown = if margin.is_finite() {
            (margin * 1000.0).trunc() / 1000.0
        } else {
            margin
        };
        format!("{}%", shown)
    }

    /// First field error, otherwise the first warning.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// A scoring session over one configuration.
///
/// Holds the expression engine (and with it the warning slot), the scorer
/// sharing the configured table, and a status line that keeps the first
/// message of the current scoring run.
#[derive(Debug, Clone)]
pub struct Scorekeeper {
    engine: Engine,
    scorer: Scorer,
    config: ScorekeeperConfig,
    status: Option<String>,
}

impl Default for Scorekeeper {
    fn default() -> Self {
        Scorekeeper {
            engine: Engine::new(),
            scorer: Scorer::default(),
            config: ScorekeeperConfig::default(),
            status: None,
        }
    }
}

impl Scorekeeper {
    /// Creates a session, building the scoring table from `config`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when the configured bands do not form a table.
    pub fn new(config: ScorekeeperConfig) -> Result<Self, ConfigError> {
        let scorer = Scorer::new(config.scoring_table()?);
        Ok(Scorekeeper {
            engine: Engine::new(),
            scorer,
            config,
            status: None,
        })
    }

    pub fn config(&self) -> &ScorekeeperConfig {
        &self.config
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Evaluates an expression, keeping any warning in the session.
    pub fn parse(&mut self, expression: &str) -> Result<f64, EngineError> {
        self.engine.parse(expression)
    }

    /// Reads a points field.
    ///
    /// Blank text is zero. Otherwise the expression is evaluated and
    /// truncated toward zero; if evaluation fails the field reads as zero.
    /// An evaluation error or a pending warning becomes the session status
    /// unless an earlier message already holds it.
    pub fn field_value(&mut self, text: &str) -> i32 {
        if text.trim().is_empty() {
            return 0;
        }

        match self.engine.parse(text) {
            Ok(value) => {
                self.status_from_warning();
                value as i32
            }
            Err(err) => {
                error!(expression = text, "{}", err);
                self.set_status(err.to_string());
                0
            }
        }
    }

    /// Scores a game already read into numbers, using the session's
    /// warning slot.
    pub fn score_game(&mut self, game: &GameResult) -> MatchScore {
        self.scorer.score(game, self.engine.warnings_mut())
    }

    /// Reads all six fields and scores the game.
    ///
    /// Fields are read minor points first (total, A, B), then major
    /// points (total, A, B); the status keeps the first message raised
    /// along the way. Warnings and status from the previous run are
    /// cleared first.
    pub fn score_fields(&mut self, fields: &ScoreFields<'_>) -> Scorecard {
        self.engine.clear_warning();
        self.status = None;

        let minor_total = self.total_field(fields.minor_total, self.config.minor_total);
        let minor_a = self.field_value(fields.minor_a);
        let minor_b = self.field_value(fields.minor_b);
        let major_total = self.total_field(fields.major_total, self.config.major_total);
        let major_a = self.field_value(fields.major_a);
        let major_b = self.field_value(fields.major_b);

        let game = GameResult::new(
            SidePoints::new(major_a, minor_a),
            SidePoints::new(major_b, minor_b),
            Totals::new(major_total, minor_total),
        );

        let score = self.score_game(&game);
        self.status_from_warning();

        let card = Scorecard {
            game,
            score,
            players: self.config.players.clone(),
            status: self.status.clone(),
        };

        info!(
            event = "scorecard",
            winner = card.winner_label().unwrap_or("draw"),
            points_a = card.points(Side::A),
            points_b = card.points(Side::B),
            margin = score.margin(),
        );
        card
    }

    fn total_field(&mut self, text: &str, configured: i32) -> i32 {
        if text.trim().is_empty() {
            configured
        } else {
            self.field_value(text)
        }
    }

    fn status_from_warning(&mut self) {
        if let Some(warning) = self.engine.warning() {
            let message = warning.to_string();
            self.set_status(message);
        }
    }

    fn set_status(&mut self, message: String) {
        if self.status.is_none() {
            self.status = Some(message);
        }
    }

    /// First message of the current run, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn warning(&self) -> Option<&Warning> {
        self.engine.warning()
    }

    /// Clears both the warning slot and the status line.
    pub fn clear(&mut self) {
        self.engine.clear_warning();
        self.status = None;
    }

    /// One display line per band, ascending, e.g. `"20%-39% -> 11:9"`.
    pub fn lookup_table(&self) -> Vec<String> {
        self.scorer
            .table()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
