//! Reusable OpenAPI response types for consistent API documentation.

#[allow(unused_imports)]
use serde_json::json;
use serde::Serialize;
use utoipa::{ToResponse, ToSchema};

/// Documentation shape of a failure envelope.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    /// Always `false`
    pub is_success: bool,
    pub error_messages: Vec<String>,
    /// Always `null`
    #[schema(value_type = Option<Object>)]
    pub result: Option<serde_json::Value>,
}

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "statusCode": 500,
        "isSuccess": false,
        "errorMessages": ["Database error occurred"],
        "result": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "statusCode": 400,
        "isSuccess": false,
        "errorMessages": ["name: must be between 1 and 30 characters"],
        "result": null
    })
)]
pub struct BadRequestValidationResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "statusCode": 400,
        "isSuccess": false,
        "errorMessages": ["Id must be a positive integer"],
        "result": null
    })
)]
pub struct BadRequestIdResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "statusCode": 404,
        "isSuccess": false,
        "errorMessages": ["Resource not found"],
        "result": null
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);
