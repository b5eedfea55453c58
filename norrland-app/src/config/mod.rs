mod provider_config;
mod settings;

pub use provider_config::{
    ApiKey, ConfigError, ProviderConfig, SearchExtensionConfig, AI_SEARCH_KEY, AI_SEARCH_URI,
    DEFAULT_API_VERSION, DEPLOYMENT_NAME, OPEN_AI_API_VERSION, OPEN_AI_KEY, OPEN_AI_URI,
    SEARCH_DOCUMENT_COUNT, SEARCH_INDEX_NAME,
};
pub use settings::{ProcessEnv, SettingsSource};
