use crate::{Config, ProviderError};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod weatherstack;

pub use weatherstack::WeatherStackProvider;

/// Source of current weather conditions for a location string.
///
/// The returned payload is opaque to callers; only the error indicator is inspected.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<serde_json::Value, ProviderError>;
}

/// Construct the WeatherStack provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.provider_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for WeatherStack.\n\
                 Hint: export {} or set `api_key` under [provider] in {}.",
            crate::config::API_KEY_ENV,
            Config::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string()),
        )
    })?;

    let provider = WeatherStackProvider::new(
        config.provider.base_url.clone(),
        api_key.to_owned(),
        Duration::from_secs(config.provider.timeout_secs),
    )?;

    Ok(Box::new(provider))
}
