mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    if let Ok(base_url) = env::var("OLLAMA_BASE_URL") {
        debug!("Overriding Ollama base URL from environment: {}", base_url);
        config.ollama.base_url = base_url;
    }

    validate(&config)?;
    Ok(config)
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.ollama.base_url.trim().is_empty() {
        return Err(Error::config("ollama.base_url must not be empty"));
    }
    if config.ollama.default_models.is_empty() {
        return Err(Error::config("ollama.default_models must not be empty"));
    }
    if let Some(model) = &config.ollama.default_model {
        if !config.ollama.default_models.contains(model) {
            return Err(Error::config(format!(
                "ollama.default_model '{}' is not listed in ollama.default_models",
                model
            )));
        }
    }
    if config.export.file_name.trim().is_empty() {
        return Err(Error::config("export.file_name must not be empty"));
    }
    Ok(())
}
