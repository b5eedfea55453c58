use crate::config::{ConfigError, ProviderConfig};
use crate::domain::ChatCompletionPayload;
use crate::infrastructure::azure_openai::ProviderError;
use async_trait::async_trait;

/// A chat-completion backend. Returns the first choice's content, which may be null.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    async fn complete(&self, payload: &ChatCompletionPayload)
        -> Result<Option<String>, ProviderError>;
}

/// Builds a provider from freshly loaded configuration, once per invocation.
pub trait ProviderConnector: Send + Sync {
    type Provider: ChatCompletionProvider;

    fn connect(&self, config: &ProviderConfig) -> Result<Self::Provider, ConfigError>;
}
