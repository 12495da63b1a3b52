use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::speech::SpeechConfig;
use self::translator::TranslatorConfig;

pub mod logging;
pub mod speech;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Build the config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::new(),
            speech: SpeechConfig::new(),
            logging: LoggingConfig::new(),
        }
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
