//! Scorer - turns a game result into match points

use std::sync::Arc;

use pointd_core::{Warning, Warnings};
use tracing::debug;

use crate::band::ScoreBand;
use crate::game::{margin, GameResult, Side};
use crate::table::ScoringTable;

/// Outcome of scoring one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    winner: Option<Side>,
    margin: f64,
    band: ScoreBand,
}

impl MatchScore {
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// The winner's margin in percentage points.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Margin credited to `side`: the winner's margin, zero for the loser
    /// and for both sides of a draw.
    pub fn margin_for(&self, side: Side) -> f64 {
        if self.winner == Some(side) {
            self.margin
        } else {
            0.0
        }
    }

    pub fn band(&self) -> &ScoreBand {
        &self.band
    }

    /// Match points for `side`. Only the winner receives the band's
    /// winner points; everyone else, including both sides of a draw,
    /// receives the loser points.
    pub fn points(&self, side: Side) -> u32 {
        if self.winner == Some(side) {
            self.band.winner_points()
        } else {
            self.band.loser_points()
        }
    }
}

/// Scores games against a shared scoring table.
///
/// # Examples
///
/// ```
/// use pointd_core::Warnings;
/// use pointd_scoring::{GameResult, Scorer, Side, SidePoints, Totals};
///
/// let game = GameResult::new(SidePoints::new(1, 600), SidePoints::new(0, 0), Totals::new(1, 600));
/// let score = Scorer::default().score(&game, &mut Warnings::new());
///
/// assert_eq!(score.winner(), Some(Side::A));
/// assert_eq!(score.margin(), 200.0);
/// assert_eq!(score.points(Side::A), 20);
/// assert_eq!(score.points(Side::B), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Scorer {
    table: Arc<ScoringTable>,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer::new(ScoringTable::standard())
    }
}

impl Scorer {
    pub fn new(table: Arc<ScoringTable>) -> Self {
        Scorer { table }
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Determines the winner, margin and band for `game`.
    ///
    /// Points above the configured totals raise a warning in `warnings`
    /// but are scored as given.
    pub fn score(&self, game: &GameResult, warnings: &mut Warnings) -> MatchScore {
        if game.major_exceeds_total() {
            warnings.set(Warning::MajorPointsExceedTotal);
        }
        if game.minor_exceeds_total() {
            warnings.set(Warning::MinorPointsExceedTotal);
        }

        let winner = game.winner();
        let margin = margin(game, winner);
        let band = *self.table.lookup(margin);

        debug!(
            event = "score",
            winner = winner.map_or("draw", Side::as_str),
            margin,
            band = %band,
        );

        MatchScore {
            winner,
            margin,
            band,
        }
    }
}
