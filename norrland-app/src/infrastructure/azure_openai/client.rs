use super::error::ProviderError;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::application::{ChatCompletionProvider, ProviderConnector};
use crate::config::{ConfigError, ProviderConfig, OPEN_AI_KEY};
use crate::domain::ChatCompletionPayload;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use url::Url;

const API_KEY_HEADER: &str = "api-key";

pub struct AzureOpenAiClient {
    http_client: reqwest::Client,
    endpoint: Url,
    api_key: HeaderValue,
    api_version: String,
}

impl AzureOpenAiClient {
    pub fn new(http_client: reqwest::Client, config: &ProviderConfig) -> Result<Self, ConfigError> {
        let mut api_key = HeaderValue::from_str(config.api_key.expose())
            .map_err(|_| ConfigError::InvalidCredential(OPEN_AI_KEY))?;
        api_key.set_sensitive(true);

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            api_key,
            api_version: config.api_version.clone(),
        })
    }

    pub fn completions_url(&self, deployment: &str) -> Url {
        let mut url = self.endpoint.clone();
        // The endpoint was checked to be a base URL when the config loaded.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["openai", "deployments", deployment, "chat", "completions"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("api-version", &self.api_version);
        url
    }
}

#[async_trait]
impl ChatCompletionProvider for AzureOpenAiClient {
    async fn complete(
        &self,
        payload: &ChatCompletionPayload,
    ) -> Result<Option<String>, ProviderError> {
        let request = ChatCompletionRequest {
            messages: &payload.messages,
        };

        let response = self
            .http_client
            .post(self.completions_url(&payload.deployment))
            .header(API_KEY_HEADER, self.api_key.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Azure OpenAI error: {} - {}", status, body);
            return Err(ProviderError::from_error_body(status.as_u16(), &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyChoices)
    }
}

/// Connects to Azure OpenAI, sharing one connection pool across invocations.
#[derive(Clone, Default)]
pub struct AzureConnector {
    http_client: reqwest::Client,
}

impl ProviderConnector for AzureConnector {
    type Provider = AzureOpenAiClient;

    fn connect(&self, config: &ProviderConfig) -> Result<AzureOpenAiClient, ConfigError> {
        AzureOpenAiClient::new(self.http_client.clone(), config)
    }
}
