use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::net::TcpListener;
use weather_core::{Config, SAMPLE_ID};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather lookup HTTP service")]
pub struct Cli {
    /// Read configuration from this file instead of the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server.
    Serve {
        /// Address to listen on, e.g. "127.0.0.1:8000". Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print the effective configuration with the API key masked.
    Config,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.apply_env();

        match self.command {
            Command::Serve { bind } => {
                if let Some(bind) = bind {
                    config.server.bind = bind;
                }
                serve(config).await
            }
            Command::Config => {
                let shown = toml::to_string_pretty(&config.redacted())
                    .context("Failed to serialize configuration to TOML")?;
                println!("{shown}");
                Ok(())
            }
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let app = weather_server::build_app(&config)?;

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    tracing::info!(addr = %config.server.bind, origin = %config.server.allowed_origin, "listening");
    tracing::info!("Sample weather ID for testing: {SAMPLE_ID}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
