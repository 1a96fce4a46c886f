pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
pub mod http;
pub mod prompt;
pub mod transcript;

// Re-export commonly used types
pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use completion::get_completion;
pub use config::Config;
pub use error::{CompletionError, Result};
