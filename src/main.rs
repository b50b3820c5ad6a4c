//! Shift engine HTTP server.

use std::env;
use std::error::Error;

use shift_engine::api::{AppState, create_router};
use shift_engine::config::RulesLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("SHIFT_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("SHIFT_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let loader = RulesLoader::load(&config_dir)?;
    info!(config_dir = %config_dir, "Rules loaded");

    let app = create_router(AppState::new(loader.into_rules()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Shift engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
