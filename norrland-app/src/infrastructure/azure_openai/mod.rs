mod client;
mod error;
mod prompt;
mod types;

pub use client::{AzureConnector, AzureOpenAiClient};
pub use error::ProviderError;
pub use prompt::{build_chat_messages, SYSTEM_PROMPT};
