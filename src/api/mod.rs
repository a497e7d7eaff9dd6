use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::search::SearchService;

pub mod handlers;
pub mod models;

pub fn create_router(search_service: Arc<SearchService>, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/search", post(handlers::search_handler))
        .route("/api/platforms", get(handlers::platforms_handler))
        .with_state(search_service)
        // Static file serving for the UI
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}
