use super::SettingsSource;
use norrland_errors::AppError;
use std::fmt;
use url::Url;

pub const OPEN_AI_URI: &str = "OPEN_AI_URI";
pub const OPEN_AI_KEY: &str = "OPEN_AI_KEY";
pub const OPEN_AI_API_VERSION: &str = "OPEN_AI_API_VERSION";
pub const AI_SEARCH_URI: &str = "AI_SEARCH_URI";
pub const AI_SEARCH_KEY: &str = "AI_SEARCH_KEY";
pub const DEPLOYMENT_NAME: &str = "DEPLOYMENT_NAME";

pub const DEFAULT_API_VERSION: &str = "2024-02-01";
pub const SEARCH_INDEX_NAME: &str = "PLACEHOLDER";
pub const SEARCH_DOCUMENT_COUNT: u32 = 43;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("DEPLOYMENT_NAME is not set")]
    MissingDeployment,

    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is not a valid absolute URI: {reason}")]
    InvalidUri { name: &'static str, reason: String },

    #[error("{0} cannot be used as a credential")]
    InvalidCredential(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingDeployment => AppError::MissingDeployment,
            other => AppError::Configuration(other.to_string()),
        }
    }
}

/// An API key that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// "On your data" search settings. Built alongside the provider config but
/// not attached to outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchExtensionConfig {
    pub endpoint: Url,
    pub api_key: ApiKey,
    pub index_name: String,
    pub document_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: Url,
    pub api_key: ApiKey,
    pub deployment_name: String,
    pub api_version: String,
    pub search: SearchExtensionConfig,
}

impl ProviderConfig {
    /// Reads the provider settings. The deployment name is checked before
    /// anything else.
    pub fn load(settings: &dyn SettingsSource) -> Result<Self, ConfigError> {
        let deployment_name =
            non_empty(settings, DEPLOYMENT_NAME).ok_or(ConfigError::MissingDeployment)?;

        let endpoint = parse_uri(settings, OPEN_AI_URI)?;
        let api_key = credential(settings, OPEN_AI_KEY)?;

        let search = SearchExtensionConfig {
            endpoint: parse_uri(settings, AI_SEARCH_URI)?,
            api_key: credential(settings, AI_SEARCH_KEY)?,
            index_name: SEARCH_INDEX_NAME.to_string(),
            document_count: SEARCH_DOCUMENT_COUNT,
        };

        let api_version = non_empty(settings, OPEN_AI_API_VERSION)
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            endpoint,
            api_key,
            deployment_name,
            api_version,
            search,
        })
    }
}

fn non_empty(settings: &dyn SettingsSource, name: &str) -> Option<String> {
    settings
        .var(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_uri(settings: &dyn SettingsSource, name: &'static str) -> Result<Url, ConfigError> {
    let raw = settings.var(name).ok_or(ConfigError::Missing(name))?;
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUri {
        name,
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUri {
            name,
            reason: "URI cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}

fn credential(settings: &dyn SettingsSource, name: &'static str) -> Result<ApiKey, ConfigError> {
    match settings.var(name) {
        None => Err(ConfigError::Missing(name)),
        Some(value) if value.is_empty() => Err(ConfigError::InvalidCredential(name)),
        Some(value) => Ok(ApiKey(value)),
    }
}
