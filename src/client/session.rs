use tracing::debug;

use super::{
    speech::SpeechCapability,
    transcript::{Message, Transcript},
    transport::{ChatTransport, SendOutcome},
};

/// One user's chat: the transcript, the pending input line and optional dictation.
///
/// Only the new message goes to the relay; the transcript is local display
/// state and is never sent back as context.
pub struct ChatSession<T> {
    transport: T,
    transcript: Transcript,
    input: String,
    speech: SpeechCapability,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T, speech: SpeechCapability) -> Self {
        Self {
            transport,
            transcript: Transcript::new(),
            input: String::new(),
            speech,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn speech(&self) -> &SpeechCapability {
        &self.speech
    }

    /// Send `text` and record the exchange. Blank text is ignored and returns `None`;
    /// otherwise returns the bot entry that was appended, reply or failure text.
    pub async fn submit(&mut self, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.transcript.append(Message::user(text));
        self.input.clear();

        let bot = match self.transport.send(text).await {
            SendOutcome::Reply(reply) => Message::bot(reply),
            SendOutcome::Failed(reason) => {
                debug!(%reason, "chat send failed");
                Message::bot(reason.display_text())
            }
        };

        self.transcript.append(bot.clone());
        Some(bot)
    }

    /// Submit whatever is in the input field.
    pub async fn send(&mut self) -> Option<Message> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = self.input.clone();
        self.submit(&text).await
    }

    /// Run one dictation pass and put the result in the input field.
    /// Returns whether the input changed.
    pub async fn dictate(&mut self) -> bool {
        match self.speech.listen().await {
            Some(text) => {
                self.input = text;
                true
            }
            None => false,
        }
    }
}
