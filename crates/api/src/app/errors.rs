use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bomkit_core::DomainError;
use bomkit_infra::InfraError;

use crate::app::services::ServiceError;

/// Status and machine-readable code for a service failure.
pub fn classify(err: &ServiceError) -> (StatusCode, &'static str) {
    match err {
        ServiceError::Domain(e) => {
            let status = match e {
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::UnknownParent(_) | DomainError::UnknownChild(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                DomainError::NotFound => StatusCode::NOT_FOUND,
            };
            (status, e.kind())
        }
        ServiceError::Infra(InfraError::MalformedExport(_)) => {
            (StatusCode::BAD_REQUEST, "malformed_export")
        }
        ServiceError::Infra(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
    }
}

/// Error response with a caller-facing message; `message` defaults to the
/// error's own text when `None`.
pub fn service_error_to_response(
    err: ServiceError,
    message: Option<String>,
) -> axum::response::Response {
    let (status, code) = classify(&err);
    json_error(status, code, message.unwrap_or_else(|| err.to_string()))
}

/// Malformed request bodies get the same JSON error shape as handler failures.
pub fn rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_request", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}

pub fn json_success(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({ "success": message.into() })),
    )
        .into_response()
}
