//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve log level and log directory for hosts (FFI, CLI).
//! - Keep parsing testable through an injectable variable lookup.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Set but invalid variables are reported, never silently replaced.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "CYCLELOG_LOG_LEVEL";
/// Environment variable overriding the log directory.
pub const ENV_LOG_DIR: &str = "CYCLELOG_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "cyclelog-logs";

/// Configuration resolution failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: `{value}`"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            let level = normalize_level(&raw).map_err(|_| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: raw.clone(),
            })?;
            config.log_level = level.to_string();
        }

        if let Some(raw) = non_blank(lookup(ENV_LOG_DIR)) {
            let path = PathBuf::from(&raw);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: raw,
                });
            }
            config.log_dir = path;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.ends_with("cyclelog-logs"));
    }

    #[test]
    fn blank_variables_are_treated_as_unset() {
        let config = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "  ")])).unwrap();
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn level_is_normalized() {
        let config = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "WARNING")])).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: "loud".to_string()
            }
        );

        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "relative/logs")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_DIR));
    }

    #[test]
    fn absolute_log_dir_is_accepted() {
        let dir = std::env::temp_dir().join("cyclelog-config-test");
        let dir_str = dir.to_str().expect("utf-8 temp dir").to_string();
        let config = CoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, dir_str.as_str())])).unwrap();
        assert_eq!(config.log_dir, dir);
    }
}
