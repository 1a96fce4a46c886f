/// Failure taxonomy for the completion forwarder.
///
/// Every error propagates straight to the caller; nothing is retried or
/// recovered locally. The layer in front of this crate decides how each
/// variant maps to a user-facing response.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("empty user prompt received")]
    EmptyPrompt,

    #[error("invalid conversation transcript: {0}")]
    Decode(String),

    #[error("completion service error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, CompletionError>;
