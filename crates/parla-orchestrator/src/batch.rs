use std::sync::Arc;

use parla_core::{ProgressStage, TranslationResult};
use parla_translator::TranslateError;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::EventSink;
use crate::orchestrator::TranslationOrchestrator;

/// Outcome of one text in a batch. Failures are kept, not propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Position in the caller's input
    pub index: usize,
    pub original: String,
    pub outcome: Result<TranslationResult, TranslateError>,
}

impl BatchItem {
    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }

    /// Completion view of the item, failed items carry the error message
    pub fn to_result(&self) -> TranslationResult {
        match &self.outcome {
            Ok(result) => result.clone(),
            Err(e) => TranslationResult::failure(e.to_string()),
        }
    }
}

impl TranslationOrchestrator {
    /// Translate several texts concurrently, at most one per available CPU.
    ///
    /// The returned items follow the order of `texts`. Items run without
    /// their own events; `events` receives one batch progress event per
    /// finished item.
    pub async fn translate_many(
        &self,
        texts: &[String],
        target: &str,
        source: Option<&str>,
        cancel: &CancellationToken,
        events: &EventSink,
    ) -> Vec<BatchItem> {
        let call = self.begin_call(cancel);
        let total = texts.len();
        let limit = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        tracing::info!(total, limit, "Starting batch translation");

        let semaphore = Arc::new(Semaphore::new(limit));
        let slots: Arc<Mutex<Vec<Option<BatchItem>>>> = Arc::new(Mutex::new(vec![None; total]));
        let mut tasks = JoinSet::new();

        for (index, text) in texts.iter().cloned().enumerate() {
            let this = self.clone();
            let semaphore = Arc::clone(&semaphore);
            let slots = Arc::clone(&slots);
            let cancel = call.clone();
            let events = events.clone();
            let target = target.to_string();
            let source = source.map(str::to_string);

            tasks.spawn(async move {
                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(TranslateError::Cancelled),
                    permit = semaphore.acquire_owned() => match permit {
                        Ok(_permit) => {
                            this.run(&text, &target, source.as_deref(), &cancel, &EventSink::silent())
                                .await
                        }
                        Err(e) => Err(TranslateError::Internal(e.to_string())),
                    },
                };

                if let Err(e) = &outcome {
                    tracing::debug!(index, "Batch item failed: {e}");
                }

                // Progress is sent under the lock so `done` never goes backwards
                let mut slots = slots.lock().await;
                slots[index] = Some(BatchItem {
                    index,
                    original: text,
                    outcome,
                });
                let done = slots.iter().filter(|slot| slot.is_some()).count();

                events
                    .progress(
                        ProgressStage::Batch { done, total },
                        format!("Translated {done} of {total}"),
                        (done * 100 / total) as u8,
                    )
                    .await;
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Batch task failed: {e}");
            }
        }

        let slots = std::mem::take(&mut *slots.lock().await);
        slots
            .into_iter()
            .zip(texts)
            .enumerate()
            .map(|(index, (slot, text))| {
                slot.unwrap_or_else(|| BatchItem {
                    index,
                    original: text.clone(),
                    outcome: Err(TranslateError::Internal("task did not finish".to_string())),
                })
            })
            .collect()
    }
}
