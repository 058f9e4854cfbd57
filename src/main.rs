//! Gearstore - JSON-file-backed storefront and admin API

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearstore::{router, AppState, Config, JsonStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = JsonStore::open(&config.store_path).await?;
    let app = router(AppState {
        store: Arc::new(store),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "gearstore listening on {} (store: {})",
        config.bind_addr(),
        config.store_path.display()
    );
    axum::serve(listener, app).await?;
    Ok(())
}
