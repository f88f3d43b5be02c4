pub mod fallback;
pub mod provider;

use log::warn;

use crate::config::AppConfig;
use provider::ChatProvider;

/// Answers customer messages: the external provider when one is configured
/// and reachable, the canned keyword responder otherwise. Provider failures
/// never reach the caller; they only downgrade the answer quality.
pub struct Assistant {
    provider: Option<ChatProvider>,
}

impl Assistant {
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = config.chat_api_key.as_ref().and_then(|api_key| {
            match ChatProvider::new(&config.chat_api_url, api_key, &config.chat_model) {
                Ok(provider) => Some(provider),
                Err(err) => {
                    warn!("Failed to initialize chat provider, using canned responses: {}", err);
                    None
                }
            }
        });
        Assistant { provider }
    }

    pub async fn reply(&self, message: &str) -> String {
        if let Some(provider) = &self.provider {
            match provider.complete(message).await {
                Ok(text) => return text,
                Err(err) => {
                    warn!("Chat provider unavailable, using canned response: {}", err);
                }
            }
        }
        fallback::respond(message).to_string()
    }
}
