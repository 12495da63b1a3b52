use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak-ng".to_string()
    }
}

fn default_max_chars() -> usize {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    /// Speech synthesizer executable
    #[serde(default = "default_command")]
    pub command: String,
    /// Longer texts are cut and suffixed with `...`
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl SpeechConfig {
    pub fn new() -> Self {
        Self {
            command: env::var("PARLA_SPEECH_COMMAND").unwrap_or_else(|_| default_command()),
            max_chars: env_or("PARLA_SPEECH_MAX_CHARS", default_max_chars()),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            max_chars: default_max_chars(),
        }
    }
}
