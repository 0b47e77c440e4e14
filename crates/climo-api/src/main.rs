use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use climo_api::{build_app, AppState};
use climo_db::DbClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Observability
    climo_obs::init("climo-api");

    // Config
    let cfg = climo_config::AppConfig::load().context("Failed to load configuration")?;
    let database_url = cfg.database_url();
    let http_bind = cfg.http_bind();

    // Database connection
    let db = DbClient::new(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.ping().await.context("Database ping failed")?;
    info!("Database connection verified");

    // HTTP server
    let app = build_app(AppState::new(db));
    let addr: SocketAddr = http_bind.parse().context("Invalid HTTP bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind TCP listener")?;

    info!(%addr, "HTTP server listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
