// src/services/relay.rs
use std::sync::Arc;

use super::{
    prompt::SYSTEM_PROMPT,
    upstream::{ChatCompletion, ChatTurn, UpstreamError},
};

/// Forwards one user message to the completion provider behind the fixed system prompt.
///
/// Holds no conversation state: every call sends exactly the system turn and the
/// given message, so earlier messages are never visible to the model.
#[derive(Clone)]
pub struct Relay {
    upstream: Arc<dyn ChatCompletion>,
    system_prompt: &'static str,
}

impl Relay {
    pub fn new(upstream: Arc<dyn ChatCompletion>) -> Self {
        Self {
            upstream,
            system_prompt: SYSTEM_PROMPT,
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        self.system_prompt
    }

    pub fn build_turns(&self, message: &str) -> [ChatTurn; 2] {
        [ChatTurn::system(self.system_prompt), ChatTurn::user(message)]
    }

    pub async fn relay(&self, message: &str) -> Result<String, UpstreamError> {
        let turns = self.build_turns(message);
        let reply = self.upstream.complete(&turns).await?;
        if reply.is_empty() {
            return Err(UpstreamError::EmptyReply);
        }
        Ok(reply)
    }
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::upstream::TurnRole;

    struct Echo;

    #[async_trait::async_trait]
    impl ChatCompletion for Echo {
        async fn complete(&self, turns: &[ChatTurn]) -> Result<String, UpstreamError> {
            Ok(turns.last().map(|t| t.content.clone()).unwrap_or_default())
        }
    }

    #[test]
    fn builds_system_then_user_turn() {
        let relay = Relay::new(Arc::new(Echo));
        let [system, user] = relay.build_turns("   ");
        assert_eq!(system.role, TurnRole::System);
        assert_eq!(system.content, SYSTEM_PROMPT);
        assert_eq!(user.role, TurnRole::User);
        // forwarded verbatim, no trimming
        assert_eq!(user.content, "   ");
    }

    #[tokio::test]
    async fn relay_returns_upstream_text() {
        let relay = Relay::new(Arc::new(Echo));
        assert_eq!(relay.relay("hello").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn empty_upstream_text_is_an_error() {
        let relay = Relay::new(Arc::new(Echo));
        assert!(matches!(relay.relay("").await, Err(UpstreamError::EmptyReply)));
    }
}
