//! Chat completions API client
//!
//! Wire types and transport for an OpenAI-compatible chat completions
//! endpoint. The forwarder in [`crate::completion`] builds requests; this
//! module only moves them over the wire and hands back the parsed response.

use crate::config::Config;
use crate::error::{CompletionError, Result};
use crate::http::get_client;
use serde::{Deserialize, Serialize};

/// Request payload for the chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Create a new chat request with an ordered message sequence
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
        }
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// One turn in a conversation: a role plus its text content.
///
/// Ordering of a `Vec<ChatMessage>` is significant; it represents the
/// chronological transcript sent to the model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a system turn
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Get the content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }

    /// Get the content of the first choice, or an error if not available
    pub fn content_or_err(&self) -> Result<&str> {
        self.content()
            .ok_or_else(|| CompletionError::Remote("response contained no choices".to_string()))
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Send a chat completion request
///
/// Transport failures (including the 15s timeout), non-success statuses and
/// unparseable bodies all surface as [`CompletionError::Remote`].
pub async fn send(request: &ChatRequest, config: &Config) -> Result<ChatResponse> {
    let client = get_client();

    let response = client
        .post(format!("{}/chat/completions", config.api_base))
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
        .map_err(|e| CompletionError::Remote(format!("request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(CompletionError::Remote(format!(
            "completion API error {status}: {text}"
        )));
    }

    response
        .json()
        .await
        .map_err(|e| CompletionError::Remote(format!("malformed completion response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("gpt-4", vec![ChatMessage::user("Hello")]).temperature(0.5);

        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.temperature, Some(0.5));
        assert_eq!(request.messages.len(), 1);
    }

    #[test]
    fn test_temperature_omitted_when_unset() {
        let request = ChatRequest::new("gpt-4", vec![ChatMessage::user("Hello")]);
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");

        let system = ChatMessage::system("You are a patient");
        assert_eq!(system.role, "system");

        let assistant = ChatMessage::assistant("Hi there");
        assert_eq!(assistant.role, "assistant");
    }

    #[test]
    fn test_first_choice_extraction() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.content(), Some("first"));
        assert_eq!(response.content_or_err().unwrap(), "first");
    }

    #[test]
    fn test_empty_choices_is_remote_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            response.content_or_err(),
            Err(CompletionError::Remote(_))
        ));
    }
}
