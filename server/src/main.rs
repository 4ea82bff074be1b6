//! Portfolio API server: loads config from env (and `.env`), picks the storage
//! backend, mounts common and resource routes.
//!
//! Run from repo root: `cargo run -p portfolio-server`

use portfolio_api::{app_router, AppState, Backend, SiteConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_api=info,portfolio_server=info,tower_http=info")),
        )
        .init();

    let config = SiteConfig::from_env()?;
    let backend = Backend::from_config(&config)?;
    let app = app_router(AppState::new(backend), &config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
