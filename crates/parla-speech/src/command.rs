use std::io::ErrorKind;
use std::process::Stdio;

use parla_config::speech::SpeechConfig;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::{SpeechError, Speaker, truncate, voice_for};

/// Runs an external synthesizer (`espeak-ng`, `say`, ...) per utterance
pub struct CommandSpeaker {
    program: String,
    max_chars: usize,
}

impl CommandSpeaker {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            program: config.command.clone(),
            max_chars: config.max_chars,
        }
    }

    fn args(&self, text: &str, voice: &str) -> Vec<String> {
        let binary = std::path::Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program);

        match binary {
            // macOS `say` has no locale switch; the default voice is used
            "say" => vec![text.to_string()],
            "spd-say" => vec![
                "--wait".to_string(),
                "-l".to_string(),
                voice.to_string(),
                text.to_string(),
            ],
            // espeak and espeak-ng take lower-case locale names
            _ => vec![
                "-v".to_string(),
                voice.to_lowercase(),
                text.to_string(),
            ],
        }
    }
}

#[async_trait::async_trait]
impl Speaker for CommandSpeaker {
    async fn speak(
        &self,
        text: &str,
        language_code: &str,
        cancel: &CancellationToken,
    ) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let voice = voice_for(language_code);
        let text = truncate(text.trim(), self.max_chars);
        tracing::debug!(language_code, voice, program = %self.program, "Speaking");

        let child = Command::new(&self.program)
            .args(self.args(&text, voice))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SpeechError::Unavailable(self.program.clone()),
                _ => SpeechError::Failed(e.to_string()),
            })?;

        // Dropping the wait future drops the child, which kills it
        let output = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SpeechError::Cancelled),
            output = child.wait_with_output() => {
                output.map_err(|e| SpeechError::Failed(e.to_string()))?
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
