use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::services::BomService;
use crate::app::{dto, errors};

pub async fn search(
    Extension(services): Extension<Arc<BomService>>,
    body: Result<Json<dto::SearchRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    let results = services.search(&body.query);
    tracing::debug!(query = %body.query, hits = results.len(), "search");
    (StatusCode::OK, Json(results)).into_response()
}

pub async fn fetch(
    Extension(services): Extension<Arc<BomService>>,
    body: Result<Json<dto::FetchRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    match services.fetch(&body.code) {
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => errors::service_error_to_response(e, None),
    }
}
