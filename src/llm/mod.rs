mod client;
mod prompt;
mod types;

pub use client::{LlmClient, OpenAiClient};
pub use prompt::SYSTEM_CONTEXT;
pub use types::{
    ChatMessage, Choice, CompletionRequest, CompletionResponse, ResponseMessage, Role,
};
