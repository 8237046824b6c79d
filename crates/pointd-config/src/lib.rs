//! Configuration system for Point'd.
//!
//! Load game totals, player labels and an optional custom scoring table
//! from TOML or YAML files.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use pointd_config::ScorekeeperConfig;
//!
//! let config = ScorekeeperConfig::from_toml_str(r#"
//!     major_total = 3
//!     minor_total = 2000
//!
//!     [players]
//!     a = "Orks"
//!     b = "Eldar"
//! "#).unwrap();
//!
//! assert_eq!(config.major_total, 3);
//! assert_eq!(config.players.b, "Eldar");
//! assert_eq!(config.scoring_table().unwrap().len(), 11);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use pointd_config::ScorekeeperConfig;
//!
//! let config = ScorekeeperConfig::load("pointd.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::sync::Arc;

use pointd_scoring::{ScoreBand, ScoringTable, Totals, DEFAULT_MAJOR_TOTAL, DEFAULT_MINOR_TOTAL};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main scorekeeper configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScorekeeperConfig {
    /// Achievable major (victory) points per side.
    #[serde(default = "default_major_total")]
    pub major_total: i32,

    /// Achievable minor (kill) points per side.
    #[serde(default = "default_minor_total")]
    pub minor_total: i32,

    /// Labels shown for the two sides.
    #[serde(default)]
    pub players: PlayersConfig,

    /// Custom scoring table; the standard table when absent.
    #[serde(default)]
    pub bands: Option<Vec<BandConfig>>,
}

fn default_major_total() -> i32 {
    DEFAULT_MAJOR_TOTAL
}

fn default_minor_total() -> i32 {
    DEFAULT_MINOR_TOTAL
}

impl Default for ScorekeeperConfig {
    fn default() -> Self {
        ScorekeeperConfig {
            major_total: DEFAULT_MAJOR_TOTAL,
            minor_total: DEFAULT_MINOR_TOTAL,
            players: PlayersConfig::default(),
            bands: None,
        }
    }
}

impl ScorekeeperConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_major_total(mut self, total: i32) -> Self {
        self.major_total = total;
        self
    }

    pub fn with_minor_total(mut self, total: i32) -> Self {
        self.minor_total = total;
        self
    }

    pub fn with_players(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.players = PlayersConfig {
            a: a.into(),
            b: b.into(),
        };
        self
    }

    /// Replaces the scoring table.
    pub fn with_bands(mut self, bands: Vec<BandConfig>) -> Self {
        self.bands = Some(bands);
        self
    }

    pub fn totals(&self) -> Totals {
        Totals::new(self.major_total, self.minor_total)
    }

    /// Builds the scoring table: the custom bands if configured, otherwise
    /// the shared standard table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when the custom bands are empty, reversed,
    /// or leave gaps or overlaps.
    pub fn scoring_table(&self) -> Result<Arc<ScoringTable>, ConfigError> {
        let Some(bands) = &self.bands else {
            return Ok(ScoringTable::standard());
        };

        let bands = bands.iter().map(BandConfig::to_band).collect();
        ScoringTable::new(bands)
            .map(Arc::new)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Player labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlayersConfig {
    pub a: String,
    pub b: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            a: "A".to_string(),
            b: "B".to_string(),
        }
    }
}

/// One row of a custom scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BandConfig {
    /// Lowest margin in the band, inclusive.
    pub low: u32,
    /// Highest margin in the band, inclusive.
    pub high: u32,
    /// Points for the winner.
    pub winner: u32,
    /// Points for the loser.
    pub loser: u32,
}

impl BandConfig {
    pub fn to_band(&self) -> ScoreBand {
        ScoreBand::new(self.low, self.high, self.winner, self.loser)
    }
}

impl From<&ScoreBand> for BandConfig {
    fn from(band: &ScoreBand) -> Self {
        BandConfig {
            low: band.low(),
            high: band.high(),
            winner: band.winner_points(),
            loser: band.loser_points(),
        }
    }
}
