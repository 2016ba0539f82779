//! HTTP surface of the weather lookup service.
//!
//! The binary in `main.rs` only parses arguments, sets up logging and serves the
//! router built here.

pub mod api;

use anyhow::Context;
use axum::{Router, http::HeaderValue};
use std::sync::Arc;
use weather_core::{Config, MemoryStore, WeatherService, provider_from_config};

pub use api::{ApiError, AppState, router};

/// Wire the provider, the seeded store and the service into a ready router.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let provider = provider_from_config(config)?;
    let store = Arc::new(MemoryStore::seeded());
    let service = WeatherService::new(Arc::from(provider), store);

    let origin = HeaderValue::from_str(&config.server.allowed_origin).with_context(|| {
        format!("Invalid allowed origin: {}", config.server.allowed_origin)
    })?;

    Ok(router(AppState { service }, origin))
}
