//! Scoring table: ordered, contiguous score bands.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::band::ScoreBand;


/// Bands of the standard tournament table, ascending.
pub const STANDARD_BANDS: [ScoreBand; 11] = [
    ScoreBand::new(0, 19, 10, 10),
    ScoreBand::new(20, 39, 11, 9),
    ScoreBand::new(40, 59, 12, 8),
    ScoreBand::new(60, 79, 13, 7),
    ScoreBand::new(80, 99, 14, 6),
    ScoreBand::new(100, 119, 15, 5),
    ScoreBand::new(120, 139, 16, 4),
    ScoreBand::new(140, 159, 17, 3),
    ScoreBand::new(160, 179, 18, 2),
    ScoreBand::new(180, 189, 19, 1),
    ScoreBand::new(190, 200, 20, 0),
];

static STANDARD: OnceLock<Arc<ScoringTable>> = OnceLock::new();

/// Reasons a list of bands cannot form a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("scoring table has no bands")]
    Empty,

    #[error("band {low}%-{high}% has its bounds reversed")]
    InvertedBand { low: u32, high: u32 },

    /// A gap or overlap between consecutive bands.
    #[error("band starting at {low}% does not directly follow band ending at {previous_high}%")]
    NotContiguous { previous_high: u32, low: u32 },
}

/// Read-only table translating a percentage margin into match points.
///
/// Bands are ascending, contiguous and non-overlapping; [`ScoringTable::new`]
/// rejects anything else.
///
/// # Examples
///
/// ```
/// use pointd_scoring::ScoringTable;
///
/// let table = ScoringTable::standard();
/// assert_eq!(table.lookup(19.0).points(), (10, 10));
/// assert_eq!(table.lookup(20.0).points(), (11, 9));
/// assert_eq!(table.lookup(200.0).points(), (20, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTable {
    bands: Vec<ScoreBand>,
}

impl ScoringTable {
    /// Builds a table from bands listed in ascending order.
    pub fn new(bands: Vec<ScoreBand>) -> Result<Self, TableError> {
        let mut previous: Option<&ScoreBand> = None;
        for band in &bands {
            if band.low() > band.high() {
                return Err(TableError::InvertedBand {
                    low: band.low(),
                    high: band.high(),
                });
            }
            if let Some(previous) = previous {
                if previous.high().checked_add(1) != Some(band.low()) {
                    return Err(TableError::NotContiguous {
                        previous_high: previous.high(),
                        low: band.low(),
                    });
                }
            }
            previous = Some(band);
        }

        if bands.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(ScoringTable { bands })
    }

    /// The standard table, built on first use and shared afterwards.
    pub fn standard() -> Arc<ScoringTable> {
        STANDARD
            .get_or_init(|| {
                Arc::new(ScoringTable {
                    bands: STANDARD_BANDS.to_vec(),
                })
            })
            .clone()
    }

    /// Returns the band containing `margin`.
    ///
    /// The margin is floored first so fractional margins land in the band
    /// of their whole part. Margins no band contains (above the top band,
    /// negative, NaN) fall back to the last band.
    pub fn lookup(&self, margin: f64) -> &ScoreBand {
        let whole = margin.floor();
        let found = if whole.is_finite() {
            self.bands.iter().find(|band| band.contains(whole as i64))
        } else {
            None
        };
        found.unwrap_or_else(|| self.last())
    }

    fn last(&self) -> &ScoreBand {
        // Construction guarantees at least one band.
        &self.bands[self.bands.len() - 1]
    }

    /// Bands in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoreBand> {
        self.bands.iter()
    }

    pub fn bands(&self) -> &[ScoreBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScoringTable {
    type Item = &'a ScoreBand;
    type IntoIter = std::slice::Iter<'a, ScoreBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
