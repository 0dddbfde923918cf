// Conta Ledger - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use conta_ledger::api::{router, AppState};
use conta_ledger::config::ServerConfig;
use conta_ledger::AccountDirectory;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    config.init_tracing()?;

    info!("Conta Ledger v{} starting", conta_ledger::VERSION);

    // In-memory only: every restart begins with an empty directory
    let state = AppState::new(AccountDirectory::new());
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
