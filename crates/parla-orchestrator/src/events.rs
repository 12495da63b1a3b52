use kanal::{AsyncReceiver, AsyncSender};
use parla_core::{ProgressEvent, ProgressStage, TranslationEvent};

/// Where a call publishes its progress and completion events.
///
/// Sending never blocks the call on a slow consumer and a dropped receiver
/// is ignored.
#[derive(Clone, Default)]
pub struct EventSink {
    tx: Option<AsyncSender<TranslationEvent>>,
}

impl EventSink {
    pub fn new(tx: AsyncSender<TranslationEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Sink backed by a fresh unbounded channel
    pub fn channel() -> (Self, AsyncReceiver<TranslationEvent>) {
        let (tx, rx) = kanal::unbounded_async();
        (Self::new(tx), rx)
    }

    /// Sink that drops every event
    pub fn silent() -> Self {
        Self { tx: None }
    }

    pub async fn emit(&self, event: TranslationEvent) {
        if let Some(tx) = &self.tx
            && let Err(e) = tx.send(event).await
        {
            tracing::debug!("Event receiver gone: {e}");
        }
    }

    pub async fn progress(&self, stage: ProgressStage, message: impl Into<String>, percent: u8) {
        self.emit(TranslationEvent::Progress(ProgressEvent::new(stage, message, percent)))
            .await;
    }
}
