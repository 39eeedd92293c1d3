use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Malformed JSON, a missing `message` and an empty one are all the same
    /// failure to the caller.
    pub fn parse(raw_body: &[u8]) -> Result<Self> {
        let request: ChatRequest =
            serde_json::from_slice(raw_body).map_err(|_| Error::InvalidRequest)?;

        if request.message.is_empty() {
            return Err(Error::InvalidRequest);
        }

        Ok(request)
    }
}

/// Either `{"reply": ...}` or `{"error": ...}`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Error { error: String },
}

impl ChatResponse {
    pub fn reply(reply: impl Into<String>) -> Self {
        Self::Reply {
            reply: reply.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
