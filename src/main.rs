use anyhow::Result;
use sendai_chat_proxy::{
    config::{self, RunMode},
    server,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG may be a full filter directive; only a bare config level is validated
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            if let Err(e) = validate_log_level(&config.server.logs.level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            EnvFilter::new(&config.server.logs.level)
        }
    };

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match config.server.mode {
        RunMode::Release => subscriber.json().init(),
        RunMode::Debug => subscriber.init(),
    }

    info!(
        "Starting Sendai chat proxy with log level: {}",
        config.server.logs.level
    );

    server::run(config).await?;

    Ok(())
}
