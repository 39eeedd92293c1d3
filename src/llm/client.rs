use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, error};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse>;
}

/// Calls an OpenAI compatible `chat/completions` endpoint over plain HTTPS.
pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: config.completions_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let body = serde_json::to_vec(request).map_err(Error::Serialization)?;

        let http_request = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .body(body)
            .build()
            .map_err(Error::RequestBuild)?;

        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(Error::ReadBody)?;

        if !status.is_success() {
            error!(status = status.as_u16(), "OpenAI API error: {}", text);
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let completion: CompletionResponse =
            serde_json::from_str(&text).map_err(Error::ParseResponse)?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}
