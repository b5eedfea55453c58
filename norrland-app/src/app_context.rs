use crate::application::ChatHandler;
use crate::config::{ProcessEnv, SettingsSource};
use crate::infrastructure::azure_openai::AzureConnector;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub chat: Arc<ChatHandler>,
}

impl AppContext {
    pub fn new(settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            chat: Arc::new(ChatHandler::new(settings, AzureConnector::default())),
        }
    }

    /// Provider settings are re-read from the environment on every request.
    pub fn from_env() -> Self {
        tracing::info!("Using Azure OpenAI backend");
        Self::new(Arc::new(ProcessEnv))
    }
}
