use crate::infrastructure::azure_openai::ProviderError;
use norrland_errors::AppError;

/// Documentation link Azure appends to content-policy rejections.
const POLICY_DOC_URL: &str = "https://go.microsoft.com/fwlink/?linkid=2198766";

/// Phrase used to spot content-policy rejections when the error carries no
/// structured code. Tied to Azure's current message wording.
const POLICY_PHRASE: &str = "prompt triggering";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// Carries the text to show the caller.
    ContentPolicyRejected(String),
    /// Carries the upstream detail, for logs only.
    Other(String),
}

impl UpstreamFailure {
    /// A content-policy rejection that leaves no text to show is treated as
    /// any other failure, so the caller still gets the fallback message.
    pub fn classify(error: &ProviderError) -> Self {
        let message = error.message();

        if error.is_content_filtered() || message.contains(POLICY_PHRASE) {
            let text = strip_policy_link(&message);
            if !text.trim().is_empty() {
                return Self::ContentPolicyRejected(text.to_string());
            }
        }

        Self::Other(error.to_string())
    }
}

impl From<UpstreamFailure> for AppError {
    fn from(failure: UpstreamFailure) -> Self {
        match failure {
            UpstreamFailure::ContentPolicyRejected(text) => AppError::ContentFiltered(text),
            UpstreamFailure::Other(detail) => AppError::Upstream(detail),
        }
    }
}

/// Cuts the message at the documentation link and drops the two characters
/// in front of it (normally ": "). Messages without the link are kept whole.
fn strip_policy_link(message: &str) -> &str {
    match message.find(POLICY_DOC_URL) {
        Some(idx) => {
            let head = &message[..idx];
            let cut = head.char_indices().rev().nth(1).map_or(0, |(i, _)| i);
            &head[..cut]
        }
        None => message,
    }
}
