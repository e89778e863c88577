//! Writecheck API Server - Backend for document compliance checking
//!
//! Provides REST endpoints for:
//! - Guideline compliance reports over extracted document text
//! - Corrected-document download

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use writecheck_api::{app, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("writecheck_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Load the language engines once for the whole process
    info!("Initializing Writecheck API...");
    let state = Arc::new(AppState::new());

    let router = app(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Writecheck API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
