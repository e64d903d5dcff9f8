//! Engine configuration — defaults and search limits loaded from ~/.harmonymap/config.yaml.

pub mod error;

pub use error::{ConfigError, Result};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::progression::SearchOptions;

/// Configuration loaded from YAML. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyConfig {
    /// Progression length used when a request doesn't give one.
    #[serde(default = "HarmonyConfig::default_length")]
    pub default_length: usize,
    /// Scale name used when a melody request doesn't give one.
    #[serde(default = "HarmonyConfig::default_scale")]
    pub default_scale: String,
    /// Progression search tuning.
    #[serde(default)]
    pub search: SearchOptions,
    /// `tracing` filter directive, e.g. `"harmonymap=debug"`. `RUST_LOG` wins.
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Standard config path (~/.harmonymap/config.yaml).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".harmonymap").join("config.yaml"))
}

impl HarmonyConfig {
    /// Load config from the standard path.
    /// Returns None if the file doesn't exist or can't be used (graceful fallback).
    pub fn load() -> Option<Self> {
        Self::load_if_usable(&default_config_path()?)
    }

    /// `load_from`, but None for a missing or unusable file.
    fn load_if_usable(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from(path) {
            Ok(config) => Some(config),
            Err(e) => {
                debug!(error = %e, "ignoring unusable config file");
                None
            }
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every search degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.search.branching == 0 {
            return Err(ConfigError::Invalid {
                field: "search.branching".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn default_length() -> usize {
        4
    }

    fn default_scale() -> String {
        "major".to_string()
    }
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            default_length: Self::default_length(),
            default_scale: Self::default_scale(),
            search: SearchOptions::default(),
            log_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config() {
        let config = HarmonyConfig::default();
        assert_eq!(config.default_length, 4);
        assert_eq!(config.default_scale, "major");
        assert_eq!(config.search, SearchOptions::default());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "default_scale: dorian\nsearch:\n  branching: 2\n";
        let config: HarmonyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_scale, "dorian");
        assert_eq!(config.default_length, 4);
        assert_eq!(config.search.branching, 2);
        assert_eq!(config.search.max_expansions, 100_000);
    }

    #[test]
    fn serialize_deserialize() {
        let config = HarmonyConfig {
            log_filter: Some("harmonymap=debug".to_string()),
            ..HarmonyConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: HarmonyConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_length: 6\nlog_filter: warn").unwrap();
        let config = HarmonyConfig::load_from(file.path()).unwrap();
        assert_eq!(config.default_length, 6);
        assert_eq!(config.log_filter.as_deref(), Some("warn"));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HarmonyConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_bad_yaml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_length: [not, a, number]").unwrap();
        let err = HarmonyConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_branching_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "search:\n  branching: 0").unwrap();
        let err = HarmonyConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("search.branching"));
    }

    #[test]
    fn graceful_load_skips_missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(HarmonyConfig::load_if_usable(&dir.path().join("config.yaml")), None);

        let mut broken = NamedTempFile::new().unwrap();
        writeln!(broken, "search:\n  branching: 0").unwrap();
        assert_eq!(HarmonyConfig::load_if_usable(broken.path()), None);

        let mut good = NamedTempFile::new().unwrap();
        writeln!(good, "default_scale: dorian").unwrap();
        let config = HarmonyConfig::load_if_usable(good.path()).unwrap();
        assert_eq!(config.default_scale, "dorian");
    }
}
