use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers;

/// Create the main application router with the calculation endpoint
pub fn create_router<P: AsRef<Path>>(static_dir: P) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Calculation endpoint
        .route("/api/calculate", post(handlers::calculate))
        // Calculator page and assets
        .fallback_service(ServeDir::new(static_dir))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
