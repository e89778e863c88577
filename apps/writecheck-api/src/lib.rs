//! Router assembly for the Writecheck API, shared by the binary and the
//! integration tests.

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Boundary timeout for a single request; the pipeline itself has none.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Compliance check and corrected-document download
        .route("/api/check", post(handlers::check_document))
        .route("/api/correct", post(handlers::correct_document))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .with_state(state)
}
