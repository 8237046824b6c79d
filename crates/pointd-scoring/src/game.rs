//! Game results, winner determination and percentage margins.

use std::cmp::Ordering;
use std::fmt;

/// Default achievable major (victory) points per side.
pub const DEFAULT_MAJOR_TOTAL: i32 = 1;

/// Default achievable minor (kill) points per side.
pub const DEFAULT_MINOR_TOTAL: i32 = 600;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points one side achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SidePoints {
    pub major: i32,
    pub minor: i32,
}

impl SidePoints {
    pub const fn new(major: i32, minor: i32) -> Self {
        SidePoints { major, minor }
    }
}

/// The most points either side can achieve in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Totals {
    pub major: i32,
    pub minor: i32,
}

impl Totals {
    pub const fn new(major: i32, minor: i32) -> Self {
        Totals { major, minor }
    }
}

impl Default for Totals {
    fn default() -> Self {
        Totals::new(DEFAULT_MAJOR_TOTAL, DEFAULT_MINOR_TOTAL)
    }
}

/// Everything needed to score a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameResult {
    pub a: SidePoints,
    pub b: SidePoints,
    pub totals: Totals,
}

impl GameResult {
    pub const fn new(a: SidePoints, b: SidePoints, totals: Totals) -> Self {
        GameResult { a, b, totals }
    }

    pub const fn side(&self, side: Side) -> SidePoints {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        determine_winner(self.a, self.b)
    }

    /// Whether either side claims more major points than the total allows.
    pub fn major_exceeds_total(&self) -> bool {
        self.a.major > self.totals.major || self.b.major > self.totals.major
    }

    /// Whether either side claims more minor points than the total allows.
    pub fn minor_exceeds_total(&self) -> bool {
        self.a.minor > self.totals.minor || self.b.minor > self.totals.minor
    }
}

/// Picks the side with more major points, falling back to minor points.
///
/// Returns `None` when both major and minor points are level.
///
/// # Examples
///
/// ```
/// use pointd_scoring::{determine_winner, Side, SidePoints};
///
/// let a = SidePoints::new(1, 100);
/// let b = SidePoints::new(1, 250);
/// assert_eq!(determine_winner(a, b), Some(Side::B));
/// assert_eq!(determine_winner(a, a), None);
/// ```
pub fn determine_winner(a: SidePoints, b: SidePoints) -> Option<Side> {
    match a.major.cmp(&b.major).then(a.minor.cmp(&b.minor)) {
        Ordering::Greater => Some(Side::A),
        Ordering::Less => Some(Side::B),
        Ordering::Equal => None,
    }
}

/// `value` as a percentage of `total`.
///
/// A zero total is not special-cased and yields an infinity or NaN.
#[inline]
pub fn percentage(value: f64, total: f64) -> f64 {
    100.0 * value / total
}

/// The winner's lead in percentage points, summed over major and minor
/// points; zero for a draw.
///
/// Computed from the point differences, which equals the winner's
/// combined percentage minus the loser's.
pub fn margin(game: &GameResult, winner: Option<Side>) -> f64 {
    let Some(winner) = winner else {
        return 0.0;
    };

    let won = game.side(winner);
    let lost = game.side(winner.other());

    let major = percentage(
        f64::from(won.major) - f64::from(lost.major),
        f64::from(game.totals.major),
    );
    let minor = percentage(
        f64::from(won.minor) - f64::from(lost.minor),
        f64::from(game.totals.minor),
    );
    major + minor
}
