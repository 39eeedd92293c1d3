pub mod cors;
pub mod handlers;
pub mod types;

use crate::{Result, chat::ChatProxy, config::Config};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use cors::CorsPolicy;
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    let cors_policy = state.cors.clone();

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/chat",
            post(handlers::chat).layer(DefaultBodyLimit::disable()),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            cors_policy,
            cors::cors_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let proxy = ChatProxy::new(&config.llm)?;
    if !proxy.has_api_key() {
        warn!("OPENAI_API_KEY is not set; /api/chat will answer with an error");
    }
    info!(
        "Chat proxy using model {} in {} mode",
        proxy.model(),
        config.server.mode
    );

    let app_state = AppState {
        proxy: Arc::new(proxy),
        cors: Arc::new(CorsPolicy::new(config.server.allowed_origins.clone())),
    };
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
