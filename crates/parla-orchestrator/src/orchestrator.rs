use std::sync::{Arc, Mutex, PoisonError};

use kanal::AsyncReceiver;
use parla_config::translator::TranslatorConfig;
use parla_core::{
    AUTO, LanguageCatalog, LanguageDetector, ProgressStage, SupportedLanguage, TranslationEvent,
    TranslationRequest, TranslationResult,
};
use parla_translator::{TranslateError, Translator};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::events::EventSink;
use crate::outcome::{AttemptOutcome, RetryPolicy, Step, attempt_percent, next_step};

#[derive(Debug, Clone, Copy)]
pub struct OrchestratorSettings {
    pub retry: RetryPolicy,
    /// Soft limit, exceeding it only logs a warning
    pub max_text_length: usize,
}

impl OrchestratorSettings {
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            retry: RetryPolicy::new(config.max_retries, config.retry_delay()),
            max_text_length: config.max_text_length,
        }
    }
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            max_text_length: 5000,
        }
    }
}

/// Validated input plus the locally known source language
struct Prepared {
    request: TranslationRequest,
    /// Explicit source, or the detector's guess. Never sent as `source_lang`
    /// unless the caller chose it.
    hint: Option<String>,
}

/// Entry point for translations: validation, source resolution, retries,
/// progress reporting and cancellation.
///
/// Cloning is cheap and clones share the in-flight call slot, so a new call
/// on any clone cancels the previous one.
#[derive(Clone)]
pub struct TranslationOrchestrator {
    translator: Arc<dyn Translator>,
    catalog: LanguageCatalog,
    detector: LanguageDetector,
    settings: OrchestratorSettings,
    current: Arc<Mutex<Option<CancellationToken>>>,
}

impl TranslationOrchestrator {
    pub fn new(translator: Arc<dyn Translator>, settings: OrchestratorSettings) -> Self {
        Self {
            translator,
            catalog: LanguageCatalog::new(),
            detector: LanguageDetector::new(),
            settings,
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    /// Translate one text.
    ///
    /// Emits zero or more progress events and exactly one completion event
    /// to `events`. Starting a call cancels the call that was running before
    /// it. Cancellation surfaces as [`TranslateError::Cancelled`].
    pub async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
        cancel: &CancellationToken,
        events: &EventSink,
    ) -> Result<TranslationResult, TranslateError> {
        let call = self.begin_call(cancel);
        self.run(text, target, source, &call, events).await
    }

    /// Run [`translate`](Self::translate) on a task, returning its event stream
    /// and the terminal result.
    pub fn spawn_translate(
        &self,
        text: String,
        target: String,
        source: Option<String>,
        cancel: &CancellationToken,
    ) -> (
        AsyncReceiver<TranslationEvent>,
        JoinHandle<Result<TranslationResult, TranslateError>>,
    ) {
        let call = self.begin_call(cancel);
        let (events, rx) = EventSink::channel();
        let this = self.clone();

        let handle = tokio::spawn(async move {
            this.run(&text, &target, source.as_deref(), &call, &events)
                .await
        });

        (rx, handle)
    }

    /// Live target languages, or the catalog defaults when the provider
    /// cannot be reached
    pub async fn supported_languages(&self, cancel: &CancellationToken) -> Vec<SupportedLanguage> {
        match self.translator.supported_languages(cancel).await {
            Ok(languages) if !languages.is_empty() => languages,
            Ok(_) => {
                tracing::warn!("Provider returned no languages, using defaults");
                self.catalog.default_supported()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch supported languages, using defaults: {e}");
                self.catalog.default_supported()
            }
        }
    }

    /// Replace the in-flight call token, cancelling the previous call
    pub(crate) fn begin_call(&self, cancel: &CancellationToken) -> CancellationToken {
        let token = cancel.child_token();
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.replace(token.clone())
            && !previous.is_cancelled()
        {
            tracing::debug!("Cancelling previous translation");
            previous.cancel();
        }
        token
    }

    /// One call without touching the in-flight slot
    pub(crate) async fn run(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
        cancel: &CancellationToken,
        events: &EventSink,
    ) -> Result<TranslationResult, TranslateError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("translate", %request_id);

        async move {
            let outcome = self.execute(text, target, source, cancel, events).await;

            let completion = match &outcome {
                Ok(result) => result.clone(),
                Err(e) => TranslationResult::failure(e.to_string()),
            };
            events.emit(TranslationEvent::Completed(completion)).await;

            outcome
        }
        .instrument(span)
        .await
    }

    async fn execute(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
        cancel: &CancellationToken,
        events: &EventSink,
    ) -> Result<TranslationResult, TranslateError> {
        let Prepared { request, hint } = self.prepare(text, target, source)?;

        tracing::info!(
            chars = request.text().chars().count(),
            source = request.source().unwrap_or(AUTO),
            target = request.target(),
            "Starting translation"
        );

        // Compares against the local hint only, the provider's detection is
        // not known yet.
        if let Some(hint) = &hint
            && hint.eq_ignore_ascii_case(request.target())
        {
            tracing::info!("Source and target are both {hint}, returning input unchanged");
            events
                .progress(
                    ProgressStage::Finished,
                    "Same language, no translation needed",
                    100,
                )
                .await;
            return Ok(TranslationResult::success(request.text(), hint.as_str()));
        }

        events
            .progress(ProgressStage::Preparing, "Checking connectivity...", 5)
            .await;
        self.check_connectivity(cancel).await?;

        events
            .progress(ProgressStage::Preparing, "Starting translation...", 20)
            .await;
        self.retry_loop(&request, hint.as_deref(), cancel, events)
            .await
    }

    fn prepare(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<Prepared, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslateError::InvalidArgument {
                field: "text",
                reason: "text to translate cannot be empty".to_string(),
            });
        }

        let target = target.trim();
        if target.is_empty() {
            return Err(TranslateError::InvalidArgument {
                field: "target",
                reason: "target language cannot be empty".to_string(),
            });
        }
        if !self.catalog.contains(target) {
            return Err(TranslateError::InvalidArgument {
                field: "target",
                reason: format!("unsupported target language '{target}'"),
            });
        }

        let chars = text.chars().count();
        if chars > self.settings.max_text_length {
            tracing::warn!(
                chars,
                limit = self.settings.max_text_length,
                "Text exceeds the recommended length"
            );
        }

        let explicit = source.map(str::trim).filter(|s| !s.is_empty());
        let hint = match explicit {
            Some(source) => Some(source.to_uppercase()),
            None => {
                let detected = self.detector.detect(text);
                tracing::debug!("Local language hint: {}", detected.unwrap_or(AUTO));
                detected.map(str::to_string)
            }
        };

        Ok(Prepared {
            request: TranslationRequest::new(text, target, explicit),
            hint,
        })
    }

    /// Diagnostic only. Fails the call solely on cancellation.
    async fn check_connectivity(&self, cancel: &CancellationToken) -> Result<(), TranslateError> {
        match self.translator.probe(cancel).await {
            Ok(()) => Ok(()),
            Err(TranslateError::Cancelled) => Err(TranslateError::Cancelled),
            Err(e) => {
                tracing::warn!("Connectivity check failed: {e}");
                Ok(())
            }
        }
    }

    async fn retry_loop(
        &self,
        request: &TranslationRequest,
        hint: Option<&str>,
        cancel: &CancellationToken,
        events: &EventSink,
    ) -> Result<TranslationResult, TranslateError> {
        let policy = self.settings.retry;
        let mut attempt = 1;

        loop {
            events
                .progress(
                    ProgressStage::Attempt {
                        attempt,
                        max_attempts: policy.max_attempts,
                    },
                    format!("Attempt {attempt} of {}...", policy.max_attempts),
                    attempt_percent(attempt, policy.max_attempts),
                )
                .await;

            let outcome = if cancel.is_cancelled() {
                AttemptOutcome::Cancelled
            } else {
                AttemptOutcome::from(self.translator.translate(request, cancel).await)
            };

            match next_step(outcome, attempt, &policy) {
                Step::Done(raw) => {
                    let detected = raw
                        .detected_source_language
                        .or_else(|| hint.map(str::to_string))
                        .unwrap_or_else(|| AUTO.to_string());

                    tracing::info!(attempt, detected = %detected, "Translation succeeded");
                    events
                        .progress(ProgressStage::Finished, "Translation completed", 100)
                        .await;
                    return Ok(TranslationResult::success(raw.text.trim(), detected));
                }
                Step::Fail(TranslateError::Cancelled) => {
                    tracing::info!(attempt, "Translation cancelled");
                    return Err(TranslateError::Cancelled);
                }
                Step::Fail(error) => {
                    tracing::error!(attempt, "Translation failed: {error}");
                    return Err(error);
                }
                Step::Retry { error, delay } => {
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Attempt failed, retrying: {error}"
                    );

                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            tracing::info!(attempt, "Translation cancelled during backoff");
                            return Err(TranslateError::Cancelled);
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                    attempt += 1;
                }
            }
        }
    }
}
