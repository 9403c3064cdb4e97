// src/config/types.rs
use crate::error::GroupError;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum similarity score (inclusive) for a pair to count as a match.
///
/// Always within `0..=100`; construction outside that range fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Threshold(u8);

impl Threshold {
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 80;

    /// # Errors
    /// Returns `InvalidThreshold` if `value > 100`.
    pub fn new(value: u8) -> Result<Self, GroupError> {
        if value > Self::MAX {
            return Err(GroupError::InvalidThreshold {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// True if `score` meets or exceeds the threshold.
    #[must_use]
    pub fn admits(self, score: u8) -> bool {
        score >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = GroupError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| GroupError::InvalidThreshold {
                value: value.to_string(),
            })
            .and_then(Self::new)
    }
}

impl From<Threshold> for i64 {
    fn from(t: Threshold) -> Self {
        i64::from(t.0)
    }
}

impl FromStr for Threshold {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed: i64 = trimmed.parse().map_err(|_| GroupError::InvalidThreshold {
            value: trimmed.to_string(),
        })?;
        Self::try_from(parsed)
    }
}

/// Contents of `levgroups.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevGroupsToml {
    #[serde(default)]
    pub threshold: Option<Threshold>,
    #[serde(default)]
    pub include_isolated: Option<bool>,
    #[serde(default)]
    pub jobs: Option<usize>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub threshold: Threshold,
    /// Emit unmatched items as singleton groups.
    pub include_isolated: bool,
    /// Scoring worker count; 0 means available parallelism.
    pub jobs: usize,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            include_isolated: false,
            jobs: 0,
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}
