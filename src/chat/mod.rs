use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{CompletionRequest, LlmClient, OpenAiClient, SYSTEM_CONTEXT},
    server::types::{ChatRequest, ChatResponse},
};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one inbound chat body into one upstream completion call.
///
/// Holds no per-request state, so a single instance is shared by every
/// request handler.
pub struct ChatProxy {
    llm_client: Arc<dyn LlmClient>,
    api_key: Option<String>,
    model: String,
}

impl ChatProxy {
    pub fn new(llm_config: &LlmConfig) -> Result<Self> {
        let llm_client = Arc::new(OpenAiClient::new(llm_config)?);
        Ok(Self::with_client(llm_client, llm_config))
    }

    pub fn with_client(llm_client: Arc<dyn LlmClient>, llm_config: &LlmConfig) -> Self {
        Self {
            llm_client,
            api_key: llm_config.api_key.clone().filter(|key| !key.is_empty()),
            model: llm_config.model.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Status code and body for a raw `POST /api/chat` payload.
    pub async fn handle(&self, raw_body: &[u8]) -> (StatusCode, ChatResponse) {
        match self.reply(raw_body).await {
            Ok(reply) => (StatusCode::OK, ChatResponse::reply(reply)),
            Err(e) => (e.status_code(), ChatResponse::error(e.to_string())),
        }
    }

    pub async fn reply(&self, raw_body: &[u8]) -> Result<String> {
        let result = self.complete(raw_body).await;
        if let Err(e) = &result {
            log_failure(e);
        }
        result
    }

    async fn complete(&self, raw_body: &[u8]) -> Result<String> {
        let request = ChatRequest::parse(raw_body)?;
        debug!("Accepted chat message of {} bytes", request.message.len());

        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let completion_request =
            CompletionRequest::with_context(&self.model, SYSTEM_CONTEXT, request.message);

        let completion = self
            .llm_client
            .create_chat_completion(api_key, &completion_request)
            .await?;

        completion.first_content().ok_or(Error::EmptyChoices)
    }
}

fn log_failure(e: &Error) {
    match e {
        Error::InvalidRequest => debug!("Rejected malformed chat request"),
        // The client already logged the upstream body.
        Error::UpstreamStatus { .. } => {}
        _ => warn!(
            error = e as &(dyn std::error::Error + 'static),
            "Chat request failed"
        ),
    }
}
