mod command;
mod voice;

pub use command::CommandSpeaker;
pub use voice::voice_for;

use tokio_util::sync::CancellationToken;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Text to speak cannot be empty")]
    EmptyText,

    #[error("Speech synthesizer `{0}` is not available")]
    Unavailable(String),

    #[error("Text-to-speech failed: {0}")]
    Failed(String),

    #[error("Speech stopped")]
    Cancelled,
}

/// Speaks text aloud through the host's synthesizer
#[async_trait::async_trait]
pub trait Speaker: Send + Sync {
    /// Speak `text`, stopping the utterance as soon as `cancel` fires
    async fn speak(
        &self,
        text: &str,
        language_code: &str,
        cancel: &CancellationToken,
    ) -> Result<(), SpeechError>;
}

/// Cut `text` to `max_chars` characters, marking the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
