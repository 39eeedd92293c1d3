use super::{
    cors::CorsPolicy,
    types::{ChatResponse, HealthResponse},
};
use crate::{Error, chat::ChatProxy};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ChatProxy>,
    pub cors: Arc<CorsPolicy>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Takes the raw body so that every decoding failure maps to the same 400.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, Error> {
    let body = body.map_err(|_| Error::InvalidRequest)?;
    let reply = state.proxy.reply(&body).await?;
    Ok(Json(ChatResponse::reply(reply)))
}

pub async fn not_found() -> (StatusCode, Json<ChatResponse>) {
    (StatusCode::NOT_FOUND, Json(ChatResponse::error("Not found")))
}
