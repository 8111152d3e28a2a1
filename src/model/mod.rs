use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use log::{debug, info};
use reqwest::Client;
use std::pin::Pin;

use crate::config::Config;
use crate::error::ChatError;
use crate::web::models::{InferenceRequest, Message};

pub type ChatStream = Pin<Box<dyn Stream<Item = Result<Bytes, ChatError>> + Send>>;

/// A model that can turn a normalized conversation into a stream of
/// server-sent event bytes.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn stream_chat(&self, messages: &[Message]) -> Result<ChatStream, ChatError>;
}

// Client for the Workers AI REST API
pub struct WorkersAi {
    run_url: String,
    api_token: String,
    client: Client,
}

impl WorkersAi {
    pub fn new(config: &Config) -> Self {
        let run_url = run_url(&config.base_url, &config.account_id, &config.model_id);
        info!("Using Workers AI model {} at: {}", config.model_id, run_url);

        Self {
            run_url,
            api_token: config.api_token.clone(),
            client: Client::new(),
        }
    }
}

fn run_url(base_url: &str, account_id: &str, model_id: &str) -> String {
    format!("{}/accounts/{}/ai/run/{}", base_url, account_id, model_id)
}

#[async_trait]
impl InferenceBackend for WorkersAi {
    async fn stream_chat(&self, messages: &[Message]) -> Result<ChatStream, ChatError> {
        let payload = InferenceRequest {
            messages,
            stream: true,
        };
        debug!("Sending {} messages to {}", messages.len(), self.run_url);

        let response = self
            .client
            .post(&self.run_url)
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::Backend(format!("{}: {}", status, error_text)));
        }

        Ok(response.bytes_stream().map(|chunk| chunk.map_err(ChatError::from)).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MODEL_ID;

    #[test]
    fn builds_run_url_from_account_and_model() {
        assert_eq!(
            run_url("https://api.cloudflare.com/client/v4", "abc123", DEFAULT_MODEL_ID),
            "https://api.cloudflare.com/client/v4/accounts/abc123/ai/run/@cf/google/gemma-3-12b-it"
        );
    }

    #[actix_web::test]
    async fn unreachable_backend_is_a_backend_error() {
        let backend = WorkersAi {
            run_url: run_url("http://127.0.0.1:1", "acct", DEFAULT_MODEL_ID),
            api_token: "token".into(),
            client: Client::new(),
        };
        let result = backend.stream_chat(&[]).await;
        assert!(matches!(result, Err(ChatError::Backend(_))));
    }
}
