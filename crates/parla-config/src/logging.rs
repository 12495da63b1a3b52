use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit console logs as JSON lines
    #[serde(default)]
    pub json: bool,
    /// Append warnings and errors to this file
    #[serde(default)]
    pub error_log: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self {
            level: env::var("PARLA_LOG_LEVEL").unwrap_or_else(|_| default_level()),
            json: env_flag("PARLA_LOG_JSON"),
            error_log: env::var("PARLA_LOG_FILE").ok().map(PathBuf::from),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            error_log: None,
        }
    }
}
