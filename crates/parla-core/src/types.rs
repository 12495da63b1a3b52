use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Label used when no source language could be determined
pub const AUTO: &str = "AUTO";

/// A validated translation request. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    target: LanguageCode,
    source: Option<LanguageCode>,
}

impl TranslationRequest {
    /// Language codes are stored upper-cased, the form the provider expects.
    pub fn new(text: impl Into<String>, target: &str, source: Option<&str>) -> Self {
        Self {
            text: text.into(),
            target: target.trim().to_uppercase(),
            source: source.map(|s| s.trim().to_uppercase()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Source language sent on the wire, `None` lets the provider detect it
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// Terminal outcome of one translate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_language: LanguageCode,
    pub success: bool,
    pub error_message: Option<String>,
}

impl TranslationResult {
    pub fn success(translated_text: impl Into<String>, detected_language: impl Into<String>) -> Self {
        Self {
            translated_text: translated_text.into(),
            detected_language: detected_language.into(),
            success: true,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            translated_text: String::new(),
            detected_language: String::new(),
            success: false,
            error_message: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    /// Validation, language resolution and the connectivity probe
    Preparing,
    /// Announced before each attempt, `attempt` starts at 1
    Attempt { attempt: u32, max_attempts: u32 },
    /// Only reached on success
    Finished,
    /// One item of a batch finished
    Batch { done: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub message: String,
    /// 0..=100, non-decreasing within a call
    pub percent: u8,
    pub stage: ProgressStage,
}

impl ProgressEvent {
    pub fn new(stage: ProgressStage, message: impl Into<String>, percent: u8) -> Self {
        Self {
            message: message.into(),
            percent: percent.min(100),
            stage,
        }
    }
}

/// Events of a single call: zero or more `Progress`, then exactly one `Completed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationEvent {
    Progress(ProgressEvent),
    Completed(TranslationResult),
}

/// Language entry as returned by the provider's `/languages` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLanguage {
    pub language: String,
    pub name: String,
    #[serde(default)]
    pub supports_formality: bool,
}
