//! Core library for the weather lookup service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the external weather provider
//! - Storage of combined weather records
//! - The submission and retrieval flows that tie them together
//!
//! It is used by `weather-server`, but carries no HTTP server code of its own.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod store;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::{Error, ProviderError, Result};
pub use model::{CreatedWeather, ErrorBody, RequestData, WeatherRecord, WeatherRequest};
pub use provider::{WeatherProvider, WeatherStackProvider, provider_from_config};
pub use service::WeatherService;
pub use store::{MemoryStore, SAMPLE_ID, WeatherStore};
