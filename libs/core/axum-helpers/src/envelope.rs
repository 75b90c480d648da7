//! Uniform response envelope returned by every endpoint.
//!
//! ```json
//! {
//!   "statusCode": 200,
//!   "isSuccess": true,
//!   "errorMessages": [],
//!   "result": { "id": 1, "name": "Royal Villa" }
//! }
//! ```
//!
//! An envelope is built once per outcome through one of the constructors
//! and has no setters.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// HTTP status the outcome maps to
    #[schema(example = 200)]
    status_code: u16,
    is_success: bool,
    #[serde(default)]
    error_messages: Vec<String>,
    result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 with a result.
    pub fn ok(result: T) -> Self {
        Self::success(StatusCode::OK, Some(result))
    }

    /// 201 with the stored resource.
    pub fn created(result: T) -> Self {
        Self::success(StatusCode::CREATED, Some(result))
    }

    /// 204 reported inside the envelope; no result.
    pub fn no_content() -> Self {
        Self::success(StatusCode::NO_CONTENT, None)
    }

    pub fn failure(status: StatusCode, messages: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: false,
            error_messages: messages,
            result: None,
        }
    }

    fn success(status: StatusCode, result: Option<T>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: true,
            error_messages: Vec::new(),
            result,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// The HTTP status follows the envelope's `statusCode`.
///
/// Delete and update report 204 in the envelope but travel as HTTP 200 so
/// the body is kept; wrap those in `(StatusCode::OK, envelope)`.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// 201 envelope plus a `Location` header pointing at the new resource.
#[derive(Debug)]
pub struct Created<T> {
    location: String,
    body: ApiResponse<T>,
}

impl<T> Created<T> {
    pub fn new(location: impl Into<String>, result: T) -> Self {
        Self {
            location: location.into(),
            body: ApiResponse::created(result),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.body.into_response();
        match HeaderValue::try_from(self.location) {
            Ok(location) => {
                response.headers_mut().insert(header::LOCATION, location);
            }
            Err(e) => tracing::warn!("Dropping unrepresentable Location header: {}", e),
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_ok_envelope() {
        let envelope = ApiResponse::ok(vec![1, 2]);
        assert_eq!(envelope.status_code(), 200);
        assert!(envelope.is_success());
        assert!(envelope.error_messages().is_empty());
        assert_eq!(envelope.result(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_failure_envelope_has_no_result() {
        let envelope: ApiResponse<String> =
            ApiResponse::failure(StatusCode::BAD_REQUEST, vec!["Villa already Exists!".into()]);
        assert_eq!(envelope.status_code(), 400);
        assert!(!envelope.is_success());
        assert_eq!(envelope.error_messages(), ["Villa already Exists!"]);
        assert!(envelope.into_result().is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(ApiResponse::<()>::no_content()).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 204,
                "isSuccess": true,
                "errorMessages": [],
                "result": null
            })
        );
    }

    #[test]
    fn test_deserializes_without_error_messages() {
        let envelope: ApiResponse<i32> =
            serde_json::from_value(json!({"statusCode": 200, "isSuccess": true, "result": 5}))
                .unwrap();
        assert_eq!(envelope.result(), Some(&5));
    }

    #[tokio::test]
    async fn test_into_response_uses_envelope_status() {
        let response = ApiResponse::<()>::failure(StatusCode::NOT_FOUND, vec![]).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["isSuccess"], false);
    }

    #[tokio::test]
    async fn test_created_sets_location() {
        let response = Created::new("/api/VillaAPI/3", json!({"id": 3})).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/VillaAPI/3");

        let body = body_json(response).await;
        assert_eq!(body["result"]["id"], 3);
    }
}
