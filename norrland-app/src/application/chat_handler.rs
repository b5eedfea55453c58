use super::provider::{ChatCompletionProvider, ProviderConnector};
use super::upstream_failure::UpstreamFailure;
use crate::config::{ProviderConfig, SettingsSource};
use crate::domain::{ChatCompletionPayload, ChatRequest};
use crate::infrastructure::azure_openai::{build_chat_messages, AzureConnector};
use norrland_errors::AppError;
use std::sync::Arc;

pub struct ChatHandler<C = AzureConnector> {
    settings: Arc<dyn SettingsSource>,
    connector: C,
}

impl<C: ProviderConnector> ChatHandler<C> {
    pub fn new(settings: Arc<dyn SettingsSource>, connector: C) -> Self {
        Self {
            settings,
            connector,
        }
    }

    /// Runs one invocation: configuration, client, request, provider call.
    ///
    /// `Ok` is the model's reply. Provider failures come back as
    /// [`AppError::ContentFiltered`] or [`AppError::Upstream`], both of which
    /// render as 200.
    pub async fn handle(&self, raw_body: &[u8]) -> Result<String, AppError> {
        let config = ProviderConfig::load(self.settings.as_ref()).map_err(|e| {
            tracing::error!("Provider configuration rejected: {}", e);
            AppError::from(e)
        })?;
        tracing::debug!("Loaded provider config: {:?}", config);

        let provider = self.connector.connect(&config).map_err(|e| {
            tracing::error!("Failed to build provider client: {}", e);
            AppError::from(e)
        })?;

        let request = match ChatRequest::from_json(raw_body) {
            Ok(Some(request)) => request,
            Ok(None) => {
                return Err(AppError::InvalidRequest("body is null".to_string()));
            }
            Err(e) => return Err(AppError::InvalidRequest(e.to_string())),
        };

        let payload = ChatCompletionPayload::new(
            config.deployment_name,
            build_chat_messages(request.message),
        );

        match provider.complete(&payload).await {
            Ok(content) => Ok(content.unwrap_or_default()),
            Err(e) => {
                let failure = UpstreamFailure::classify(&e);
                tracing::warn!("Chat completion failed: {:?}", failure);
                Err(failure.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ProviderConfig};
    use crate::domain::{ChatMessage, Role};
    use crate::infrastructure::azure_openai::{ProviderError, SYSTEM_PROMPT};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const REPLY: &str =
        "Schu, här är ett recept... Men jag kommer från Skellefteå så jag vet inte någonting.";

    /// Test connector that records what it sees and answers with a fixed result.
    #[derive(Clone)]
    struct ScriptedConnector {
        outcome: Result<Option<String>, ProviderError>,
        connects: Arc<Mutex<Vec<ProviderConfig>>>,
        payloads: Arc<Mutex<Vec<ChatCompletionPayload>>>,
    }

    impl ScriptedConnector {
        fn answering(outcome: Result<Option<String>, ProviderError>) -> Self {
            Self {
                outcome,
                connects: Arc::new(Mutex::new(Vec::new())),
                payloads: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    struct ScriptedProvider {
        outcome: Result<Option<String>, ProviderError>,
        payloads: Arc<Mutex<Vec<ChatCompletionPayload>>>,
    }

    #[async_trait]
    impl ChatCompletionProvider for ScriptedProvider {
        async fn complete(
            &self,
            payload: &ChatCompletionPayload,
        ) -> Result<Option<String>, ProviderError> {
            self.payloads.lock().unwrap().push(payload.clone());
            self.outcome.clone()
        }
    }

    impl ProviderConnector for ScriptedConnector {
        type Provider = ScriptedProvider;

        fn connect(&self, config: &ProviderConfig) -> Result<ScriptedProvider, ConfigError> {
            self.connects.lock().unwrap().push(config.clone());
            Ok(ScriptedProvider {
                outcome: self.outcome.clone(),
                payloads: self.payloads.clone(),
            })
        }
    }

    fn settings() -> HashMap<String, String> {
        [
            ("OPEN_AI_URI", "https://norrland.openai.azure.com/"),
            ("OPEN_AI_KEY", "open-ai-key"),
            ("AI_SEARCH_URI", "https://norrland.search.windows.net"),
            ("AI_SEARCH_KEY", "search-key"),
            ("DEPLOYMENT_NAME", "gpt-35-turbo"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn handler(
        settings: HashMap<String, String>,
        connector: &ScriptedConnector,
    ) -> ChatHandler<ScriptedConnector> {
        ChatHandler::new(Arc::new(settings), connector.clone())
    }

    #[tokio::test]
    async fn test_happy_path_returns_reply_verbatim() {
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings(), &connector);

        let reply = handler
            .handle(r#"{"message": "Ge mig ett recept på palt"}"#.as_bytes())
            .await;

        assert_eq!(reply, Ok(REPLY.to_string()));
    }

    #[tokio::test]
    async fn test_payload_puts_system_prompt_first() {
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings(), &connector);

        handler
            .handle(r#"{"message": "Ge mig ett recept på palt"}"#.as_bytes())
            .await
            .unwrap();

        let payloads = connector.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].deployment, "gpt-35-turbo");
        assert_eq!(
            payloads[0].messages,
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(Some("Ge mig ett recept på palt".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_deployment_fails_before_anything_else() {
        let mut settings = settings();
        settings.remove("DEPLOYMENT_NAME");
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings, &connector);

        for body in [&br#"{"message": "hej"}"#[..], b"not json", b""] {
            assert_eq!(handler.handle(body).await, Err(AppError::MissingDeployment));
        }
        assert!(connector.connects.lock().unwrap().is_empty());
        assert!(connector.payloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_endpoint_is_a_configuration_error() {
        let mut settings = settings();
        settings.insert("OPEN_AI_URI".to_string(), "::not a uri".to_string());
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings, &connector);

        let err = handler.handle(br#"{"message": "hej"}"#).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(err.status_code(), 500);
        assert!(connector.payloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_bodies_are_rejected() {
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings(), &connector);

        for body in [&b"{not json"[..], b"null", b"", b"[1, 2]"] {
            let err = handler.handle(body).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidRequest(_)), "{:?}", body);
            assert_eq!(err.status_code(), 400);
        }
        assert!(connector.payloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_and_missing_message_reach_the_provider() {
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings(), &connector);

        assert!(handler.handle(br#"{"message": null}"#).await.is_ok());
        assert!(handler.handle(b"{}").await.is_ok());

        let payloads = connector.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 2);
        for payload in payloads.iter() {
            assert_eq!(payload.messages[1].role, Role::User);
            assert_eq!(payload.messages[1].content, None);
        }
    }

    #[tokio::test]
    async fn test_null_reply_becomes_empty_body() {
        let connector = ScriptedConnector::answering(Ok(None));
        let handler = handler(settings(), &connector);

        assert_eq!(handler.handle(br#"{"message": "hej"}"#).await, Ok(String::new()));
    }

    #[tokio::test]
    async fn test_content_policy_failure_is_extracted() {
        let connector = ScriptedConnector::answering(Err(ProviderError::Api {
            status: 400,
            code: None,
            inner_code: None,
            message: "...prompt triggering Azure content management policy. https://go.microsoft.com/fwlink/?linkid=2198766?".to_string(),
        }));
        let handler = handler(settings(), &connector);

        let err = handler.handle(br#"{"message": "hej"}"#).await.unwrap_err();
        assert_eq!(err.status_code(), 200);
        assert_eq!(
            err.user_message(),
            "...prompt triggering Azure content management policy"
        );
    }

    #[tokio::test]
    async fn test_other_failures_fall_back() {
        let connector = ScriptedConnector::answering(Err(ProviderError::Transport(
            "operation timed out".to_string(),
        )));
        let handler = handler(settings(), &connector);

        let err = handler.handle(br#"{"message": "hej"}"#).await.unwrap_err();
        assert_eq!(err.status_code(), 200);
        assert_eq!(err.user_message(), "Något gick fel");
    }

    #[tokio::test]
    async fn test_configuration_is_reread_identically() {
        let connector = ScriptedConnector::answering(Ok(Some(REPLY.to_string())));
        let handler = handler(settings(), &connector);

        handler.handle(br#"{"message": "hej"}"#).await.unwrap();
        handler.handle(br#"{"message": "hej igen"}"#).await.unwrap();

        let connects = connector.connects.lock().unwrap();
        assert_eq!(connects.len(), 2);
        assert_eq!(connects[0], connects[1]);
    }
}
