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

use crate::entity::{villa, villa_number};
use crate::error::VillaResult;
use crate::models::{VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto};
use crate::patch::PatchDocument;
use crate::service::VillaNumberService;

pub const TAG: &str = "VillaNumberAPI";

pub const BASE_PATH: &str = "/api/VillaNumberAPI";

type SharedService<R, V> = Arc<VillaNumberService<R, V>>;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_villa_numbers,
        create_villa_number,
        get_villa_number,
        update_villa_number,
        patch_villa_number,
        delete_villa_number
    ),
    components(
        schemas(VillaNumberDto, VillaNumberCreateDto, VillaNumberUpdateDto),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Villa number management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R, V>(service: VillaNumberService<R, V>) -> Router
where
    R: Repository<villa_number::Entity> + 'static,
    V: Repository<villa::Entity> + 'static,
{
    Router::new()
        .route("/", get(list_villa_numbers).post(create_villa_number))
        .route(
            "/{id}",
            get(get_villa_number)
                .put(update_villa_number)
                .patch(patch_villa_number)
                .delete(delete_villa_number),
        )
        .with_state(Arc::new(service))
}

/// List every villa number
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All villa numbers", body = ApiResponse<Vec<VillaNumberDto>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_villa_numbers<R, V>(
    State(service): State<SharedService<R, V>>,
) -> VillaResult<ApiResponse<Vec<VillaNumberDto>>>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    Ok(ApiResponse::ok(service.list_villa_numbers().await?))
}

/// Get a villa number
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa number")
    ),
    responses(
        (status = 200, description = "Villa number found", body = ApiResponse<VillaNumberDto>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_villa_number<R, V>(
    State(service): State<SharedService<R, V>>,
    IdPath(villa_no): IdPath,
) -> VillaResult<ApiResponse<VillaNumberDto>>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    Ok(ApiResponse::ok(service.get_villa_number(villa_no).await?))
}

/// Create a villa number for an existing villa
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = VillaNumberCreateDto,
    responses(
        (status = 201, description = "Villa number created", body = ApiResponse<VillaNumberDto>,
            headers(("Location" = String, description = "URL of the new villa number"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_villa_number<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<VillaNumberCreateDto>,
) -> VillaResult<impl IntoResponse>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    let number = service.create_villa_number(input).await?;

    AuditEvent::new(
        "villa_number.create",
        Some(format!("villa_number:{}", number.villa_no)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({ "villa_id": number.villa_id }))
    .log();

    Ok(Created::new(format!("{BASE_PATH}/{}", number.villa_no), number))
}

/// Delete a villa number
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa number")
    ),
    responses(
        (status = 200, description = "Villa number deleted, envelope statusCode 204", body = ApiResponse<VillaNumberDto>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_villa_number<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    IdPath(villa_no): IdPath,
) -> VillaResult<impl IntoResponse>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    service.delete_villa_number(villa_no).await?;

    AuditEvent::new(
        "villa_number.delete",
        Some(format!("villa_number:{villa_no}")),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok((StatusCode::OK, ApiResponse::<()>::no_content()))
}

/// Replace a villa number
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa number")
    ),
    request_body = VillaNumberUpdateDto,
    responses(
        (status = 200, description = "Villa number updated, envelope statusCode 204", body = ApiResponse<VillaNumberDto>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_villa_number<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    IdPath(villa_no): IdPath,
    ValidatedJson(input): ValidatedJson<VillaNumberUpdateDto>,
) -> VillaResult<impl IntoResponse>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    let number = service.update_villa_number(villa_no, input).await?;

    AuditEvent::new(
        "villa_number.update",
        Some(format!("villa_number:{villa_no}")),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({ "villa_id": number.villa_id }))
    .log();

    Ok((StatusCode::OK, ApiResponse::<()>::no_content()))
}

/// Apply a JSON Patch document to a villa number
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Villa number")
    ),
    request_body(content = PatchDocument, content_type = "application/json"),
    responses(
        (status = 204, description = "Villa number patched"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_villa_number<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    IdPath(villa_no): IdPath,
    JsonBody(document): JsonBody<PatchDocument>,
) -> VillaResult<impl IntoResponse>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    service.patch_villa_number(villa_no, document).await?;

    AuditEvent::new(
        "villa_number.patch",
        Some(format!("villa_number:{villa_no}")),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(StatusCode::NO_CONTENT)
}
