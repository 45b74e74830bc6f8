//! Configuration file loading for self-play.
//!
//! Settings come from an optional TOML file; anything missing falls back to
//! its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use xiangqi_core::Side;
use xiangqi_minimax::SearchConfig;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A search depth is outside the supported range.
    #[error("Invalid search depth {0} (expected 1 to {max})", max = SelfPlayConfig::MAX_DEPTH)]
    InvalidDepth(u32),
}

/// Self-play settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Search settings for Red.
    #[serde(default)]
    pub red: SearchConfig,
    /// Search settings for Black.
    #[serde(default)]
    pub black: SearchConfig,
    /// Stop after this many plies. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    /// Play this many random legal plies before searching. Defaults to 0.
    #[serde(default)]
    pub random_opening_plies: u32,
}

fn default_max_plies() -> u32 {
    200
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            red: SearchConfig::default(),
            black: SearchConfig::default(),
            max_plies: default_max_plies(),
            random_opening_plies: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Deepest search the driver accepts.
    pub const MAX_DEPTH: u32 = 8;

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::config_path()`] is
    /// read if present; otherwise the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path: `selfplay.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("selfplay.toml")
    }

    /// Returns the search settings for `side`.
    pub fn search_for(&self, side: Side) -> &SearchConfig {
        match side {
            Side::Red => &self.red,
            Side::Black => &self.black,
        }
    }

    /// Checks that both search depths are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDepth`] for a depth of 0 or above
    /// [`Self::MAX_DEPTH`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for depth in [self.red.depth, self.black.depth] {
            if depth == 0 || depth > Self::MAX_DEPTH {
                return Err(ConfigError::InvalidDepth(depth));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = SelfPlayConfig::parse(
            r#"
max_plies = 60
random_opening_plies = 4

[red]
depth = 2

[black]
depth = 4
pruning = false
"#,
        )
        .unwrap();

        assert_eq!(config.max_plies, 60);
        assert_eq!(config.random_opening_plies, 4);
        assert_eq!(config.search_for(Side::Red), &SearchConfig::with_depth(2));
        assert_eq!(config.black.depth, 4);
        assert!(!config.black.pruning);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SelfPlayConfig::parse("").unwrap();
        assert_eq!(config, SelfPlayConfig::default());
        assert_eq!(config.max_plies, 200);
        assert_eq!(config.red.depth, 3);
    }

    #[test]
    fn test_invalid_toml() {
        let result = SelfPlayConfig::parse("max_plies = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = SelfPlayConfig::load(Some(Path::new("/nonexistent/selfplay.toml")));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn test_validate_depth() {
        let mut config = SelfPlayConfig::default();
        assert!(config.validate().is_ok());

        config.black.depth = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDepth(0))));

        config.black.depth = 9;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid search depth 9 (expected 1 to 8)");
    }
}
