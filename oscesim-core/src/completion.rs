//! The completion forwarder.
//!
//! Takes the student's latest prompt plus the encoded conversation so far,
//! rebuilds the full message sequence behind the fixed role-play
//! instruction, and forwards it to the chat completions API. Stateless: the
//! caller owns the transcript, this module owns one request/response cycle.

use crate::chat::{self, ChatMessage, ChatRequest};
use crate::config::Config;
use crate::error::{CompletionError, Result};
use crate::{prompt, transcript};
use std::time::Instant;
use tracing::{debug, info};

/// Sampling temperature for completion calls. Kept low so the model sticks
/// to the role-play instruction.
const TEMPERATURE: f32 = 0.5;

/// Forward one consultation turn to the model and return its reply.
///
/// `conversation_thus_far` is the base64 transcript blob; `None` or an empty
/// string uniformly means "no prior turns". Exactly one outbound request is
/// made, and only after all input validation has passed.
pub async fn get_completion(
    user_prompt: &str,
    conversation_thus_far: Option<&str>,
    config: &Config,
) -> Result<String> {
    if user_prompt.trim().is_empty() {
        return Err(CompletionError::EmptyPrompt);
    }

    let messages = build_messages(user_prompt, conversation_thus_far, &config.language)?;

    debug!(model = %config.completion_model, temperature = TEMPERATURE, "requesting completion");
    let start = Instant::now();

    let request =
        ChatRequest::new(&config.completion_model, messages).temperature(TEMPERATURE);
    let response = chat::send(&request, config).await?;
    let completion = response.content_or_err()?;

    info!(
        model = %config.completion_model,
        elapsed_ms = %start.elapsed().as_millis(),
        response = %completion,
        "completion received"
    );

    Ok(completion.to_string())
}

/// Build the ordered message sequence for one completion call:
/// system instruction, then prior turns in original order, then the new
/// user turn last.
pub fn build_messages(
    user_prompt: &str,
    conversation_thus_far: Option<&str>,
    language: &str,
) -> Result<Vec<ChatMessage>> {
    let mut messages = vec![ChatMessage::system(prompt::initial_prompt(language))];

    if let Some(blob) = conversation_thus_far.filter(|b| !b.is_empty()) {
        messages.extend(transcript::decode(blob)?);
    }

    messages.push(ChatMessage::user(user_prompt));
    Ok(messages)
}
