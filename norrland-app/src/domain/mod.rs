mod chat_message;
mod chat_request;

pub use chat_message::{ChatCompletionPayload, ChatMessage, Role};
pub use chat_request::ChatRequest;
