#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    #[error("Invalid API key or authentication failed")]
    InvalidKey,

    #[error("API key quota exceeded or access denied")]
    QuotaOrAccessDenied,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("{0}")]
    AuthOrQuota(AuthFailure),

    #[error("Invalid request parameters: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Empty response from translation API")]
    EmptyResponse,

    #[error("No translations returned from translation API")]
    NoTranslations,

    #[error("Empty translation text received")]
    EmptyTranslationText,

    #[error("Failed to parse API response: {0}")]
    ResponseParse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Operation cancelled by the user")]
    Cancelled,

    #[error("Translation task failed: {0}")]
    Internal(String),
}

impl TranslateError {
    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TranslateError::RateLimited
                | TranslateError::Api { .. }
                | TranslateError::EmptyResponse
                | TranslateError::NoTranslations
                | TranslateError::EmptyTranslationText
                | TranslateError::ResponseParse(_)
                | TranslateError::Network(_)
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TranslateError::Cancelled)
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, TranslateError::AuthOrQuota(_))
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::Network(format!("request timed out: {e}"))
        } else if e.is_connect() {
            TranslateError::Network(format!("connection failed: {e}"))
        } else if e.is_decode() {
            TranslateError::ResponseParse(e.to_string())
        } else {
            TranslateError::Network(e.to_string())
        }
    }
}
