//! ScoreBand - one row of the scoring table

use std::fmt;
use std::ops::RangeInclusive;

/// Maps an inclusive range of percentage margins to the match points
/// awarded to the winner and the loser.
///
/// # Examples
///
/// ```
/// use pointd_scoring::ScoreBand;
///
/// let band = ScoreBand::new(20, 39, 11, 9);
/// assert!(band.contains(20));
/// assert!(band.contains(39));
/// assert!(!band.contains(40));
/// assert_eq!(band.to_string(), "20%-39% -> 11:9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreBand {
    low: u32,
    high: u32,
    winner_points: u32,
    loser_points: u32,
}

impl ScoreBand {
    pub const fn new(low: u32, high: u32, winner_points: u32, loser_points: u32) -> Self {
        ScoreBand {
            low,
            high,
            winner_points,
            loser_points,
        }
    }

    #[inline]
    pub const fn low(&self) -> u32 {
        self.low
    }

    #[inline]
    pub const fn high(&self) -> u32 {
        self.high
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.low..=self.high
    }

    #[inline]
    pub const fn winner_points(&self) -> u32 {
        self.winner_points
    }

    #[inline]
    pub const fn loser_points(&self) -> u32 {
        self.loser_points
    }

    /// Points as `(winner, loser)`.
    pub const fn points(&self) -> (u32, u32) {
        (self.winner_points, self.loser_points)
    }

    pub fn contains(&self, margin: i64) -> bool {
        margin >= i64::from(self.low) && margin <= i64::from(self.high)
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%-{}% -> {}:{}",
            self.low, self.high, self.winner_points, self.loser_points
        )
    }
}
