//! Host server for the code-review feedback board.
//!
//! Serves the Leptos app with SSR and the hydration bundle under `/pkg`.
//! All vote logic lives in the `votes` and `client` crates.

mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| HostError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "feedback board listening");
    axum::serve(listener, app).await?;
    Ok(())
}
