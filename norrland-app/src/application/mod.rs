mod chat_handler;
mod provider;
mod upstream_failure;

pub use chat_handler::ChatHandler;
pub use provider::{ChatCompletionProvider, ProviderConnector};
pub use upstream_failure::UpstreamFailure;
