//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use tracing::Level;

/// Errors produced while reading the environment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid log level {value:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel { var: &'static str, value: String },

    #[error("{var} has invalid boolean {value:?} (expected true/false, 1/0, yes/no or on/off)")]
    InvalidFlag { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum level written by the tracing subscriber
    /// Example: LOG_LEVEL=debug
    pub log_level: Level,

    /// Compress responses with Brotli/Gzip
    /// Example: COMPRESSION=off
    pub compression: bool,

    /// Serve `.br`/`.gz` siblings of the bundle from /pkg when they exist
    /// Example: PRECOMPRESSED_ASSETS=false
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => parse_level("LOG_LEVEL", &value)?,
            None => defaults.log_level,
        };
        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_flag("COMPRESSION", &value)?,
            None => defaults.compression,
        };
        let precompressed_assets = match lookup("PRECOMPRESSED_ASSETS") {
            Some(value) => parse_flag("PRECOMPRESSED_ASSETS", &value)?,
            None => defaults.precompressed_assets,
        };

        Ok(Self {
            log_level,
            compression,
            precompressed_assets,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_level(var: &'static str, value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel {
            var,
            value: value.to_string(),
        })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[
            ("LOG_LEVEL", "debug"),
            ("COMPRESSION", "off"),
            ("PRECOMPRESSED_ASSETS", "0"),
        ])
        .unwrap();

        assert_eq!(config.log_level, Level::DEBUG);
        assert!(!config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = config_from(&[("LOG_LEVEL", " WARN ")]).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = config_from(&[("LOG_LEVEL", "loud")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidLogLevel {
                var: "LOG_LEVEL",
                value: "loud".to_string()
            }
        );
        assert!(err.to_string().contains("LOG_LEVEL"));
    }

    #[test]
    fn test_flag_spellings() {
        for on in ["1", "true", "YES", "On"] {
            assert!(config_from(&[("COMPRESSION", on)]).unwrap().compression);
        }
        for off in ["0", "false", "No", "OFF"] {
            assert!(!config_from(&[("COMPRESSION", off)]).unwrap().compression);
        }
    }

    #[test]
    fn test_invalid_flag() {
        let err = config_from(&[("PRECOMPRESSED_ASSETS", "maybe")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidFlag {
                var: "PRECOMPRESSED_ASSETS",
                ..
            }
        ));
    }
}
