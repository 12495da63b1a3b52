mod deepl;
mod error;

pub use deepl::DeepLTranslator;
pub use error::{AuthFailure, TranslateError};

use parla_core::{LanguageCode, SupportedLanguage, TranslationRequest};
use tokio_util::sync::CancellationToken;

/// Translation provider interface.
///
/// Every method performs a single attempt. Retrying is up to the caller.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `request`, failing with [`TranslateError::Cancelled`] as soon
    /// as `cancel` fires
    async fn translate(
        &self,
        request: &TranslationRequest,
        cancel: &CancellationToken,
    ) -> Result<RawTranslation, TranslateError>;

    /// Lightweight reachability check against the provider
    async fn probe(&self, cancel: &CancellationToken) -> Result<(), TranslateError>;

    /// Live list of target languages
    async fn supported_languages(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<SupportedLanguage>, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Provider answer for a single text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTranslation {
    pub text: String,
    pub detected_source_language: Option<LanguageCode>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}
