//! Point'd Scoring - match points from a finished game.
//!
//! - [`determine_winner`] and [`margin`] compare the two sides
//! - [`ScoringTable`] maps the margin to match points through [`ScoreBand`]s
//! - [`Scorer`] ties both together and reports over-total warnings

pub mod band;
pub mod game;
pub mod scorer;
pub mod table;

#[cfg(test)]
mod tests;

pub use band::ScoreBand;
pub use game::{
    determine_winner, margin, percentage, GameResult, Side, SidePoints, Totals,
    DEFAULT_MAJOR_TOTAL, DEFAULT_MINOR_TOTAL,
};
pub use scorer::{MatchScore, Scorer};
pub use table::{ScoringTable, TableError, STANDARD_BANDS};
