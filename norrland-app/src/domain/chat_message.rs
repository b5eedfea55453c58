use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
        }
    }

    pub fn user(content: Option<String>) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }
}

/// What gets sent to the chat-completion deployment for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionPayload {
    pub deployment: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionPayload {
    pub fn new(deployment: String, messages: Vec<ChatMessage>) -> Self {
        Self {
            deployment,
            messages,
        }
    }
}
