use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
};

use crate::app::services::{BomService, ServiceError};
use crate::app::{dto, errors};

pub async fn associate(
    Extension(services): Extension<Arc<BomService>>,
    body: Result<Json<dto::AssociateRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    match services.associate(&body.items) {
        Ok(parent) => errors::json_success(dto::associated_message(parent.as_str())),
        Err(ServiceError::Infra(e)) => {
            let message = dto::storage_failed_message(&e);
            errors::service_error_to_response(ServiceError::Infra(e), Some(message))
        }
        Err(e) => errors::service_error_to_response(e, None),
    }
}
