//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the state object (inventory, relationships, exporter)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and response messages
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::{BomService, ServiceError};

/// Build the full HTTP router from on-disk data (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> Result<Router, ServiceError> {
    let services = Arc::new(BomService::from_config(config)?);
    Ok(router(services))
}

/// Router over an already-loaded service.
pub fn router(services: Arc<BomService>) -> Router {
    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        )))
}
