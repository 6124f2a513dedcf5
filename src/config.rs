use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{models::GameConfig, settings::SettingsModel, QuizError};

/// Environment variable consulted when no config path is given on the
/// command line.
pub const CONFIG_ENV: &str = "TIMES_TABLE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid default settings: {0}")]
    Invalid(#[from] QuizError),
}

/// Front-end configuration, read from a JSON file. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Initial picker values on the settings screen.
    pub defaults: GameConfig,
    /// Fixed seed for reproducible question sequences.
    pub rng_seed: Option<u64>,
    pub log: LogConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub max_level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { max_level: Level::Info }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.settings()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load from `path`, falling back to `$TIMES_TABLE_CONFIG`, then to the
    /// built-in defaults.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// A fresh settings model preloaded with the configured defaults.
    pub fn settings(&self) -> Result<SettingsModel, QuizError> {
        SettingsModel::from_config(self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.defaults, GameConfig { table: 3, question_total: 5 });
        assert_eq!(config.log.max_level, Level::Info);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn full_document_is_read() {
        let config = AppConfig::from_json(
            r#"{
                "defaults": { "table": 9, "question_total": 20 },
                "rng_seed": 42,
                "log": { "max_level": "debug" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.defaults, GameConfig { table: 9, question_total: 20 });
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.log.max_level.as_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(config.settings().unwrap().table(), 9);
    }

    #[test]
    fn out_of_domain_defaults_are_rejected() {
        let err = AppConfig::from_json(r#"{ "defaults": { "table": 15, "question_total": 5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(QuizError::InvalidConfig { .. })), "{err:?}");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json("{ defaults: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/times-table.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
    }
}
