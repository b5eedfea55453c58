use super::types::ErrorResponse;

const CONTENT_FILTER_CODE: &str = "content_filter";
const POLICY_VIOLATION_CODE: &str = "ResponsibleAIPolicyViolation";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("{message}\nStatus: {status}")]
    Api {
        status: u16,
        code: Option<String>,
        inner_code: Option<String>,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("No choices in response")]
    EmptyChoices,
}

impl ProviderError {
    /// Builds an API error from a non-success response body. Bodies that are
    /// not in the Azure error shape are kept verbatim as the message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(response) => Self::Api {
                status,
                code: response.error.code,
                inner_code: response.error.innererror.and_then(|inner| inner.code),
                message: response.error.message,
            },
            Err(_) => Self::Api {
                status,
                code: None,
                inner_code: None,
                message: body.to_string(),
            },
        }
    }

    /// Whether the provider itself flagged the request as a content-policy rejection.
    pub fn is_content_filtered(&self) -> bool {
        match self {
            Self::Api {
                code, inner_code, ..
            } => {
                code.as_deref() == Some(CONTENT_FILTER_CODE)
                    || inner_code.as_deref() == Some(POLICY_VIOLATION_CODE)
            }
            _ => false,
        }
    }

    /// The upstream message, without the status suffix for API errors.
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
