use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

/// Placeholder used when `DEEPL_API_KEY` is unset. Deployments must override it.
pub const FALLBACK_API_KEY: &str = "00000000-0000-0000-0000-000000000000:fx";

fn default_api_key() -> String {
    FALLBACK_API_KEY.to_string()
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_max_text_length() -> usize {
    5000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Base URL of the provider, without the `/translate` suffix
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base of the linear backoff between attempts
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Soft limit, longer texts only produce a warning
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_key = env::var("DEEPL_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_api_key);

        let api_url = env::var("DEEPL_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            api_key,
            api_url,
            timeout_seconds: env_or("PARLA_TIMEOUT_SECONDS", default_timeout_seconds()),
            max_retries: env_or("PARLA_MAX_RETRIES", default_max_retries()),
            retry_delay_ms: env_or("PARLA_RETRY_DELAY_MS", default_retry_delay_ms()),
            max_text_length: env_or("PARLA_MAX_TEXT_LENGTH", default_max_text_length()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn uses_fallback_key(&self) -> bool {
        self.api_key == FALLBACK_API_KEY
    }

    /// Cheap shape check for DeepL keys, not a validation against the service
    pub fn has_plausible_api_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key.contains(':') && key.len() > 10
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            max_text_length: default_max_text_length(),
        }
    }
}
