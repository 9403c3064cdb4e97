// src/config/mod.rs
pub mod types;

pub use self::types::{Config, LevGroupsToml, Threshold};

use crate::error::{GroupError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Name of the optional per-directory config file.
pub const CONFIG_FILE: &str = "levgroups.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `levgroups.toml` from the working directory, if present.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        let mut config = Self::new();
        config.load_local_config()?;
        Ok(config)
    }

    /// Overlays `levgroups.toml` from the working directory. A missing file is not an error.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load_local_config(&mut self) -> Result<()> {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => self.apply_toml(Path::new(CONFIG_FILE), &content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no {CONFIG_FILE} in working directory, using defaults");
                Ok(())
            }
            Err(source) => Err(GroupError::Io {
                source,
                path: CONFIG_FILE.into(),
            }),
        }
    }

    /// Overlays an explicitly named config file, which must exist.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or malformed.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|source| GroupError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        self.apply_toml(path, &content)
    }

    /// Parses TOML text and overlays every key it sets.
    ///
    /// # Errors
    /// Returns `Config` for syntax errors or unknown keys, `InvalidThreshold`
    /// for a threshold outside `0..=100`.
    pub fn apply_toml(&mut self, path: &Path, content: &str) -> Result<()> {
        let parsed = parse_toml(path, content)?;
        debug!(path = %path.display(), ?parsed, "loaded config file");
        self.merge(parsed);
        Ok(())
    }

    fn merge(&mut self, file: LevGroupsToml) {
        if let Some(threshold) = file.threshold {
            self.threshold = threshold;
        }
        if let Some(include_isolated) = file.include_isolated {
            self.include_isolated = include_isolated;
        }
        if let Some(jobs) = file.jobs {
            self.jobs = jobs;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
    }
}

fn parse_toml(path: &Path, content: &str) -> Result<LevGroupsToml> {
    toml::from_str(content).map_err(|e| {
        // Out-of-range thresholds surface through serde as a custom message;
        // report them with the dedicated variant so callers can tell them apart.
        let message = e.message().to_string();
        if message.starts_with("invalid threshold") {
            GroupError::InvalidThreshold {
                value: threshold_value(content).unwrap_or(message),
            }
        } else {
            GroupError::Config {
                path: path.to_path_buf(),
                message,
            }
        }
    })
}

fn threshold_value(content: &str) -> Option<String> {
    let table: toml::Table = toml::from_str(content).ok()?;
    table.get("threshold").map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;

    fn apply(content: &str) -> Result<Config> {
        let mut c = Config::new();
        c.apply_toml(Path::new("levgroups.toml"), content)?;
        Ok(c)
    }

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.threshold.value(), 80);
        assert!(!c.include_isolated);
        assert_eq!(c.jobs, 0);
        assert_eq!(c.format, OutputFormat::Text);
    }

    #[test]
    fn test_overlay() {
        let c = apply("threshold = 65\ninclude_isolated = true\njobs = 2\nformat = \"json\"").unwrap();
        assert_eq!(c.threshold.value(), 65);
        assert!(c.include_isolated);
        assert_eq!(c.jobs, 2);
        assert_eq!(c.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_keeps_defaults() {
        let c = apply("jobs = 4").unwrap();
        assert_eq!(c.threshold, Threshold::default());
        assert_eq!(c.jobs, 4);
    }

    #[test]
    fn test_out_of_range_threshold() {
        let err = apply("threshold = 101").unwrap_err();
        assert!(matches!(err, GroupError::InvalidThreshold { ref value } if value == "101"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_negative_threshold() {
        let err = apply("threshold = -3").unwrap_err();
        assert!(matches!(err, GroupError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_unknown_key() {
        let err = apply("treshold = 70").unwrap_err();
        assert!(matches!(err, GroupError::Config { .. }));
    }

    #[test]
    fn test_threshold_from_str() {
        assert_eq!("0".parse::<Threshold>().unwrap().value(), 0);
        assert_eq!(" 100 ".parse::<Threshold>().unwrap().value(), 100);
        assert!("101".parse::<Threshold>().is_err());
        assert!("-1".parse::<Threshold>().is_err());
        assert!("eighty".parse::<Threshold>().is_err());
        assert!("80.5".parse::<Threshold>().is_err());
    }

    #[test]
    fn test_admits_inclusive() {
        let t = Threshold::new(80).unwrap();
        assert!(t.admits(80));
        assert!(t.admits(100));
        assert!(!t.admits(79));
        assert!(Threshold::new(101).is_err());
    }
}
