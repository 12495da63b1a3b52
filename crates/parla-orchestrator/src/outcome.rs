use std::time::Duration;

use parla_translator::{RawTranslation, TranslateError};

/// Result of a single provider attempt, tagged for the retry loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success(RawTranslation),
    Retryable(TranslateError),
    Terminal(TranslateError),
    Cancelled,
}

impl From<Result<RawTranslation, TranslateError>> for AttemptOutcome {
    fn from(result: Result<RawTranslation, TranslateError>) -> Self {
        match result {
            Ok(raw) => AttemptOutcome::Success(raw),
            Err(TranslateError::Cancelled) => AttemptOutcome::Cancelled,
            Err(e) if e.is_retryable() => AttemptOutcome::Retryable(e),
            Err(e) => AttemptOutcome::Terminal(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Attempt `n` waits `base_delay * n` before attempt `n + 1`
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(1000))
    }
}

/// What the retry loop does next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Done(RawTranslation),
    Retry { error: TranslateError, delay: Duration },
    Fail(TranslateError),
}

pub fn next_step(outcome: AttemptOutcome, attempt: u32, policy: &RetryPolicy) -> Step {
    match outcome {
        AttemptOutcome::Success(raw) => Step::Done(raw),
        AttemptOutcome::Cancelled => Step::Fail(TranslateError::Cancelled),
        AttemptOutcome::Terminal(error) => Step::Fail(error),
        AttemptOutcome::Retryable(error) if attempt >= policy.max_attempts => Step::Fail(error),
        AttemptOutcome::Retryable(error) => Step::Retry {
            error,
            delay: policy.delay_for(attempt),
        },
    }
}

/// Percent announced before attempt `attempt` (1-based). Stays below 100,
/// which is reserved for success.
pub fn attempt_percent(attempt: u32, max_attempts: u32) -> u8 {
    const START: u32 = 20;
    const SPAN: u32 = 70;

    let max_attempts = max_attempts.max(1);
    let attempt = attempt.clamp(1, max_attempts);
    (START + attempt * SPAN / max_attempts) as u8
}
