mod batch;
mod events;
mod orchestrator;
mod outcome;

pub use batch::BatchItem;
pub use events::EventSink;
pub use orchestrator::{OrchestratorSettings, TranslationOrchestrator};
pub use outcome::{AttemptOutcome, RetryPolicy, Step, attempt_percent, next_step};

#[cfg(test)]
mod tests;
