mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = load_from(&config_path).await?;
    apply_overrides(&mut config, |key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to an empty mapping
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Applies the deployment overrides (`SERVICE_URL`, `ENGINE_URLS`,
/// `ENGINE_ANNOUNCE_RETRIES`, `ENGINE_ANNOUNCE_RETRY_DELAY`) on top of the file.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("SERVICE_URL") {
        config.service.url = url;
    }

    if let Some(urls) = lookup("ENGINE_URLS") {
        config.engine.urls = urls
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(retries) = lookup("ENGINE_ANNOUNCE_RETRIES") {
        config.engine.announce_retries = retries.trim().parse().map_err(|_| {
            Error::config(format!("ENGINE_ANNOUNCE_RETRIES is not a number: {retries}"))
        })?;
    }

    if let Some(delay) = lookup("ENGINE_ANNOUNCE_RETRY_DELAY") {
        config.engine.announce_retry_delay = delay.trim().parse().map_err(|_| {
            Error::config(format!("ENGINE_ANNOUNCE_RETRY_DELAY is not a number: {delay}"))
        })?;
    }

    Ok(())
}
