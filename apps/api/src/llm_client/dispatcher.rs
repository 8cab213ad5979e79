//! Prompt Dispatcher — normalizes every completion outcome to a displayable string.
//!
//! Callers never branch on failure: a dispatch that fails for any reason
//! (connect, auth, status, malformed body) yields the same shape as one that
//! succeeds — a string the view can show.

use std::sync::Arc;

use tracing::warn;

use super::CompletionClient;

/// Stateless wrapper around the completion client. Safe to share across
/// sessions; each invocation is independent.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn CompletionClient>,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Issues exactly one outbound request and returns its text, or a
    /// formatted failure string embedding the cause. Never errors, never
    /// retries, never caches.
    pub async fn ask(&self, system: &str, user: &str) -> String {
        match self.client.complete(system, user).await {
            Ok(text) => text,
            Err(e) => {
                warn!("completion call failed: {e}");
                format!("Error: Unable to fetch response due to {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::MockCompletionClient;

    #[tokio::test]
    async fn returns_completion_text_on_success() {
        let client = Arc::new(MockCompletionClient::new().reply("All good."));
        let dispatcher = Dispatcher::new(client.clone());

        let answer = dispatcher.ask("system", "user").await;

        assert_eq!(answer, "All good.");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn converts_failure_into_displayable_string() {
        let client = Arc::new(MockCompletionClient::new().fail("rate limit exceeded"));
        let dispatcher = Dispatcher::new(client.clone());

        let answer = dispatcher.ask("system", "user").await;

        assert!(answer.starts_with("Error: Unable to fetch response due to"));
        assert!(answer.contains("rate limit exceeded"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn forwards_system_and_user_content_unchanged() {
        let client = Arc::new(MockCompletionClient::new());
        let dispatcher = Dispatcher::new(client.clone());

        dispatcher.ask("You are a hiring assistant.", "What is Rust?").await;

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "You are a hiring assistant.");
        assert_eq!(calls[0].1, "What is Rust?");
    }
}
