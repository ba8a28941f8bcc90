use anyhow::{Context, Result};
use dotenv::dotenv;
use explorer::{api, config, console, load_catalog};
use std::sync::Arc;
use tracing::{error, info};
use utils::{
    errors::{SERVER_BIND_FAILED, SERVER_FAILED},
    tracing::run_with_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    run_with_tracing(run).await
}

async fn run() -> Result<()> {
    config::load()?;
    let config = config::get_config()?;

    let catalog = Arc::new(load_catalog(&config.catalog)?);

    if std::env::args().nth(1).as_deref() == Some("console") {
        return console::run(catalog, config.search.debounce_window()).await;
    }

    let bind_address = config.server.bind_address.as_str();
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("{SERVER_BIND_FAILED} on {bind_address}"))?;
    let addr = listener.local_addr()?;
    let app = api::router(catalog);

    info!(address = %addr, "Starting explorer API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(SERVER_FAILED)?;

    info!("Explorer shutting down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}
