use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorCode;
use crate::envelope::ApiResponse;

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::NotFound.code(), "No route matched");
    ApiResponse::<()>::failure(
        StatusCode::NOT_FOUND,
        vec!["The requested resource was not found".to_string()],
    )
    .into_response()
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ApiResponse::<()>::failure(
        StatusCode::METHOD_NOT_ALLOWED,
        vec![ErrorCode::MethodNotAllowed.default_message().to_string()],
    )
    .into_response()
}
