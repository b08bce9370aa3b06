//! Chat client: an append-only transcript plus one relay round trip per send.

pub mod session;
pub mod speech;
pub mod transcript;
pub mod transport;

pub use session::ChatSession;
pub use speech::{CommandRecognizer, SpeechCapability, SpeechRecognizer};
pub use transcript::{Message, Role, Transcript};
pub use transport::{ChatTransport, FALLBACK_REPLY, FailureReason, HttpTransport, SendOutcome};
