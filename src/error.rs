use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::types::ChatResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a chat request can fail.
///
/// The `Display` text of the request-path variants is exactly what the caller
/// sees in `{"error": ...}`. Underlying causes are attached as sources so they
/// show up in the server log, never in the response body.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request format")]
    InvalidRequest,

    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("Failed to create request")]
    Serialization(#[source] serde_json::Error),

    #[error("Failed to create API request")]
    RequestBuild(#[source] reqwest::Error),

    #[error("Failed to call OpenAI API")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read API response")]
    ReadBody(#[source] reqwest::Error),

    #[error("OpenAI API returned an error")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to parse API response")]
    ParseResponse(#[source] serde_json::Error),

    #[error("No response from AI")]
    EmptyChoices,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ChatResponse::error(self.to_string()))).into_response()
    }
}
