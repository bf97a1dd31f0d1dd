use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
};

use crate::app::services::BomService;
use crate::app::{dto, errors};

pub async fn export(
    Extension(services): Extension<Arc<BomService>>,
    body: Result<Json<dto::ExportRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            let message = dto::export_failed_message(rejection.body_text());
            return errors::json_error(rejection.status(), "invalid_request", message);
        }
    };

    match services.export(body.items) {
        Ok(file_name) => errors::json_success(dto::exported_message(&file_name)),
        Err(e) => {
            let message = dto::export_failed_message(&e);
            errors::service_error_to_response(e, Some(message))
        }
    }
}
