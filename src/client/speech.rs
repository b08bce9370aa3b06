use async_trait::async_trait;
use tokio::process::Command;
use tracing::warn;

/// Single-shot speech-to-text. Resolves once with the recognized text, or
/// `None` when nothing was recognized.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize_once(&self) -> Option<String>;
}

/// Whether the current platform can take spoken input.
pub enum SpeechCapability {
    Available(Box<dyn SpeechRecognizer>),
    Unavailable,
}

impl SpeechCapability {
    pub fn available(recognizer: impl SpeechRecognizer + 'static) -> Self {
        SpeechCapability::Available(Box::new(recognizer))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SpeechCapability::Available(_))
    }

    pub async fn listen(&self) -> Option<String> {
        match self {
            SpeechCapability::Available(recognizer) => recognizer.recognize_once().await,
            SpeechCapability::Unavailable => None,
        }
    }
}

impl std::fmt::Debug for SpeechCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechCapability::Available(_) => f.write_str("Available"),
            SpeechCapability::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// Dictation through an external program: runs it once and takes its trimmed
/// stdout as the transcript. A failed run or empty output yields nothing.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a shell-style command line on whitespace. No quoting support.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn recognize_once(&self) -> Option<String> {
        let output = match Command::new(&self.program).args(&self.args).output().await {
            Ok(output) => output,
            Err(e) => {
                warn!(program = %self.program, error = %e, "dictation command could not start");
                return None;
            }
        };

        if !output.status.success() {
            warn!(program = %self.program, status = %output.status, "dictation command failed");
            return None;
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_args() {
        let recognizer = CommandRecognizer::parse("whisper-once --lang en").unwrap();
        assert_eq!(recognizer.program, "whisper-once");
        assert_eq!(recognizer.args, vec!["--lang", "en"]);
        assert!(CommandRecognizer::parse("   ").is_none());
    }

    #[tokio::test]
    async fn unavailable_yields_nothing() {
        let speech = SpeechCapability::Unavailable;
        assert!(!speech.is_available());
        assert_eq!(speech.listen().await, None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn command_stdout_becomes_transcript() {
        let speech = SpeechCapability::available(CommandRecognizer::new(
            "echo",
            vec!["what is".into(), "metabolic health".into()],
        ));
        assert!(speech.is_available());
        assert_eq!(
            speech.listen().await.as_deref(),
            Some("what is metabolic health")
        );
    }

    #[tokio::test]
    async fn missing_program_yields_nothing() {
        let recognizer = CommandRecognizer::new("definitely-not-a-real-dictation-tool", vec![]);
        assert_eq!(recognizer.recognize_once().await, None);
    }
}
