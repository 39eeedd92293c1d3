mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads the YAML file named by `CONFIG_PATH` (defaults when unset), then
/// applies environment overrides.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(config_path) => load_file(&config_path).await?,
        Err(_) => Config::default(),
    };

    config.apply_env_with(|key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_file(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides fields from `PORT`, `OPENAI_API_KEY`, `OPENAI_BASE_URL` and
    /// `RUN_MODE`, resolved through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }

        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            self.llm.api_key = Some(api_key);
        }
        // An empty key counts as not configured.
        if self.llm.api_key.as_deref().is_some_and(str::is_empty) {
            self.llm.api_key = None;
        }

        if let Some(base_url) = lookup("OPENAI_BASE_URL").filter(|u| !u.is_empty()) {
            self.llm.base_url = base_url;
        }

        if let Some(mode) = lookup("RUN_MODE").filter(|m| !m.is_empty()) {
            self.server.mode = mode.parse().map_err(Error::Config)?;
        }

        Ok(())
    }
}
