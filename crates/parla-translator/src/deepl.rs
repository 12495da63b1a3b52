use std::time::Duration;

use async_trait::async_trait;
use parla_config::translator::TranslatorConfig;
use parla_core::{SupportedLanguage, TranslationRequest};
use reqwest::StatusCode;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::{AuthFailure, ProviderMetadata, RawTranslation, TranslateError, Translator};

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("parla/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        Self::new(config.api_key.clone(), config.api_url.clone(), config.timeout())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }

    async fn post_translate(&self, request: &TranslationRequest) -> Result<RawTranslation, TranslateError> {
        let mut params = vec![("text", request.text()), ("target_lang", request.target())];
        if let Some(source) = request.source() {
            params.push(("source_lang", source));
        }

        let response = self
            .client
            .post(self.endpoint("translate"))
            .header("Authorization", self.auth_header())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Translation request rejected");
            return Err(classify_status(status, body));
        }

        parse_translation(&body)
    }

    async fn get_languages(&self) -> Result<Vec<SupportedLanguage>, TranslateError> {
        let response = self
            .client
            .get(self.endpoint("languages"))
            .query(&[("type", "target")])
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(classify_status(status, body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
        cancel: &CancellationToken,
    ) -> Result<RawTranslation, TranslateError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TranslateError::Cancelled),
            result = self.post_translate(request) => result,
        }
    }

    async fn probe(&self, cancel: &CancellationToken) -> Result<(), TranslateError> {
        let request = self
            .client
            .get(self.endpoint("languages"))
            .query(&[("type", "target")])
            .header("Authorization", self.auth_header())
            .send();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(TranslateError::Cancelled),
            response = request => response?,
        };

        tracing::debug!(status = response.status().as_u16(), "Connectivity check");
        Ok(())
    }

    async fn supported_languages(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<SupportedLanguage>, TranslateError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TranslateError::Cancelled),
            result = self.get_languages() => result,
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<TranslationEntry>,
}

#[derive(Deserialize)]
struct TranslationEntry {
    #[serde(default)]
    text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

/// Map a non-2xx response to an error
fn classify_status(status: StatusCode, body: String) -> TranslateError {
    match status {
        StatusCode::UNAUTHORIZED => TranslateError::AuthOrQuota(AuthFailure::InvalidKey),
        StatusCode::FORBIDDEN => TranslateError::AuthOrQuota(AuthFailure::QuotaOrAccessDenied),
        StatusCode::BAD_REQUEST => TranslateError::InvalidRequest(body),
        StatusCode::TOO_MANY_REQUESTS => TranslateError::RateLimited,
        _ => TranslateError::Api {
            status: status.as_u16(),
            body,
        },
    }
}

/// Parse a 2xx `/translate` body
fn parse_translation(body: &str) -> Result<RawTranslation, TranslateError> {
    if body.trim().is_empty() {
        return Err(TranslateError::EmptyResponse);
    }

    let response: TranslateResponse =
        serde_json::from_str(body).map_err(|e| TranslateError::ResponseParse(e.to_string()))?;

    let first = response
        .translations
        .into_iter()
        .next()
        .ok_or(TranslateError::NoTranslations)?;

    if first.text.trim().is_empty() {
        return Err(TranslateError::EmptyTranslationText);
    }

    Ok(RawTranslation {
        text: first.text,
        detected_source_language: first
            .detected_source_language
            .filter(|code| !code.trim().is_empty())
            .map(|code| code.to_uppercase()),
    })
}
