use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::ProviderError;

use super::WeatherProvider;

const UNKNOWN_ERROR: &str = "Unknown error from weather API";

/// Client for the WeatherStack `current` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherStackProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherStackProvider {
    /// `timeout` bounds a single call; calls are never retried.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, api_key, http })
    }
}

#[async_trait]
impl WeatherProvider for WeatherStackProvider {
    async fn current(&self, location: &str) -> Result<Value, ProviderError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("access_key", self.api_key.as_str()), ("query", location)])
            .send()
            .await
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| ProviderError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, body = %truncate_body(&body), "WeatherStack request failed");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::InvalidBody(e.to_string()))?;

        if let Some(err) = parsed.get("error") {
            let info = err.get("info").and_then(Value::as_str).unwrap_or(UNKNOWN_ERROR);
            return Err(ProviderError::Reported(info.to_string()));
        }

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
