/// LLM Client — the single point of entry for all completion calls in TalentScout.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All completion traffic MUST go through this module.
///
/// Model: mixtral-8x7b-32768 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod dispatcher;

pub use dispatcher::Dispatcher;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "mixtral-8x7b-32768";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no choices")]
    EmptyChoices,
}

/// Seam over the completion service. The production implementation is
/// [`GroqClient`]; tests drive the dispatcher with a scripted client instead.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issues exactly one completion request carrying one system message
    /// followed by one user message, and returns the first choice's content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// Reqwest-backed client for Groq's OpenAI-compatible chat completions API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
}

impl GroqClient {
    /// No client-side timeout is configured: the transport's own limits bound
    /// how long a dispatch can block.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        // Exactly one attempt per call: no retry, no backoff.
        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<GroqError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyChoices)?;

        debug!(
            "completion succeeded ({} chars)",
            choice.message.content.len()
        );

        Ok(choice.message.content)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_system_then_user() {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a hiring assistant.",
                },
                ChatMessage {
                    role: "user",
                    content: "Hello",
                },
            ],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Hello");
    }

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "mixtral-8x7b-32768",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Here are your questions."},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 24, "completion_tokens": 56, "total_tokens": 80}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "Here are your questions."
        );
    }

    #[test]
    fn parses_api_error_body() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        let parsed: GroqError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Invalid API Key");
    }
}
