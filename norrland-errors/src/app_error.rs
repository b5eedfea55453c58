/// Body returned for every upstream failure that is not a content-policy rejection.
pub const FALLBACK_MESSAGE: &str = "Något gick fel";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("DEPLOYMENT_NAME saknas i konfigurationen")]
    MissingDeployment,

    #[error("Felaktig konfiguration: {0}")]
    Configuration(String),

    #[error("Ogiltig förfrågan: {0}")]
    InvalidRequest(String),

    #[error("Stoppad av innehållsfiltret: {0}")]
    ContentFiltered(String),

    #[error("Kunde inte nå AI-tjänsten: {0}")]
    Upstream(String),
}

impl AppError {
    /// Text shown to the caller. Configuration and request errors leak nothing.
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingDeployment | Self::Configuration(_) | Self::InvalidRequest(_) => "",
            Self::ContentFiltered(text) => text,
            Self::Upstream(_) => FALLBACK_MESSAGE,
        }
    }

    /// HTTP status for this error. Upstream failures are reported as 200 on purpose.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingDeployment | Self::Configuration(_) => 500,
            Self::InvalidRequest(_) => 400,
            Self::ContentFiltered(_) | Self::Upstream(_) => 200,
        }
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            match self.user_message() {
                "" => status.into_response(),
                message => (status, message.to_string()).into_response(),
            }
        }
    }
}
