use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, AuditEvent, AuditOutcome, Created, IdPath, JsonBody, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    extract_ip_from_headers, extract_user_agent,
};
use database::Repository;
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::villa;
use crate::error::VillaResult;
use crate::models::{VillaCreateDto, VillaDto, VillaUpdateDto};
use crate::patch::{PatchDocument, PatchOperation};
use crate::service::VillaService;

pub const TAG: &str = "VillaAPI";

/// Where the router is mounted; used to build `Location` headers.
pub const BASE_PATH: &str = "/api/VillaAPI";

#[derive(OpenApi)]
#[openapi(
    paths(list_villas, create_villa, get_villa, update_villa, patch_villa, delete_villa),
    components(
        schemas(VillaDto, VillaCreateDto, VillaUpdateDto, PatchOperation, PatchDocument),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Villa management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: Repository<villa::Entity> + 'static>(service: VillaService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_villas).post(create_villa))
        .route(
            "/{id}",
            get(get_villa)
                .put(update_villa)
                .patch(patch_villa)
                .delete(delete_villa),
        )
        .with_state(shared_service)
}

/// List every villa
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All villas", body = ApiResponse<Vec<VillaDto>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_villas<R: Repository<villa::Entity>>(
    State(service): State<Arc<VillaService<R>>>,
) -> VillaResult<ApiResponse<Vec<VillaDto>>> {
    let villas = service.list_villas().await?;
    Ok(ApiResponse::ok(villas))
}

/// Get a villa by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa id")
    ),
    responses(
        (status = 200, description = "Villa found", body = ApiResponse<VillaDto>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_villa<R: Repository<villa::Entity>>(
    State(service): State<Arc<VillaService<R>>>,
    IdPath(id): IdPath,
) -> VillaResult<ApiResponse<VillaDto>> {
    let villa = service.get_villa(id).await?;
    Ok(ApiResponse::ok(villa))
}

/// Create a villa
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = VillaCreateDto,
    responses(
        (status = 201, description = "Villa created", body = ApiResponse<VillaDto>,
            headers(("Location" = String, description = "URL of the new villa"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_villa<R: Repository<villa::Entity>>(
    State(service): State<Arc<VillaService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<VillaCreateDto>,
) -> VillaResult<impl IntoResponse> {
    let villa = service.create_villa(input).await?;

    AuditEvent::new(
        "villa.create",
        Some(format!("villa:{}", villa.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({ "name": villa.name }))
    .log();

    Ok(Created::new(format!("{BASE_PATH}/{}", villa.id), villa))
}

/// Delete a villa
///
/// The envelope reports 204; the response itself is 200 so the body survives.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa id")
    ),
    responses(
        (status = 200, description = "Villa deleted, envelope statusCode 204", body = ApiResponse<VillaDto>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_villa<R: Repository<villa::Entity>>(
    State(service): State<Arc<VillaService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> VillaResult<impl IntoResponse> {
    service.delete_villa(id).await?;

    AuditEvent::new("villa.delete", Some(format!("villa:{id}")), AuditOutcome::Success)
        .with_ip(extract_ip_from_headers(&headers))
        .with_user_agent(extract_user_agent(&headers))
        .log();

    Ok((StatusCode::OK, ApiResponse::<()>::no_content()))
}

/// Replace a villa
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa id")
    ),
    request_body = VillaUpdateDto,
    responses(
        (status = 200, description = "Villa updated, envelope statusCode 204", body = ApiResponse<VillaDto>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_villa<R: Repository<villa::Entity>>(
    State(service): State<Arc<VillaService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<VillaUpdateDto>,
) -> VillaResult<impl IntoResponse> {
    let villa = service.update_villa(id, input).await?;

    AuditEvent::new("villa.update", Some(format!("villa:{id}")), AuditOutcome::Success)
        .with_ip(extract_ip_from_headers(&headers))
        .with_user_agent(extract_user_agent(&headers))
        .with_details(json!({ "name": villa.name }))
        .log();

    Ok((StatusCode::OK, ApiResponse::<()>::no_content()))
}

/// Apply a JSON Patch document to a villa
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa id")
    ),
    request_body(content = PatchDocument, content_type = "application/json"),
    responses(
        (status = 204, description = "Villa patched"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_villa<R: Repository<villa::Entity>>(
    State(service): State<Arc<VillaService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    JsonBody(document): JsonBody<PatchDocument>,
) -> VillaResult<impl IntoResponse> {
    let operations = document.operations().len();
    service.patch_villa(id, document).await?;

    AuditEvent::new("villa.patch", Some(format!("villa:{id}")), AuditOutcome::Success)
        .with_ip(extract_ip_from_headers(&headers))
        .with_user_agent(extract_user_agent(&headers))
        .with_details(json!({ "operations": operations }))
        .log();

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockVillaStore;
    use axum::body::Body;
    use axum::http::Request;
    use database::DatabaseError;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_store_failure_is_500_envelope() {
        let mut store = MockVillaStore::new();
        store
            .expect_get_all()
            .returning(|_| Err(DatabaseError::HealthCheckFailed("pool timed out".into())));

        let response = router(VillaService::new(store))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["isSuccess"], false);
        assert!(
            body["errorMessages"][0]
                .as_str()
                .unwrap()
                .contains("pool timed out")
        );
    }

    #[tokio::test]
    async fn test_negative_id_never_reaches_store() {
        let response = router(VillaService::new(MockVillaStore::new()))
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
