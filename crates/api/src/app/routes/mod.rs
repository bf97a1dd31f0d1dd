use axum::{
    Router,
    routing::{get, post},
};

pub mod export;
pub mod items;
pub mod relationships;
pub mod system;

/// Router for every endpoint (the page, JSON operations and health).
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::index))
        .route("/health", get(system::health))
        .route("/search", post(items::search))
        .route("/fetch", post(items::fetch))
        .route("/associate", post(relationships::associate))
        .route("/export", post(export::export))
}
