use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }
}

/// Ordered messages of one client session. Entries are only ever appended.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len()
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.append(Message::user("hi")), 1);
        assert_eq!(transcript.append(Message::bot("hello")), 2);

        let snapshot = transcript.snapshot();
        assert_eq!(snapshot, vec![Message::user("hi"), Message::bot("hello")]);
        assert_eq!(transcript.last(), Some(&Message::bot("hello")));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut transcript = Transcript::new();
        transcript.append(Message::user("one"));
        let before = transcript.snapshot();
        transcript.append(Message::bot("two"));
        assert_eq!(before.len(), 1);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&Message::bot("x")).unwrap();
        assert_eq!(json, r#"{"role":"bot","text":"x"}"#);
    }
}
