use axum_helpers::errors::responses::ErrorEnvelope;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(ErrorEnvelope)
    ),
    info(
        title = "Magic Villa API",
        version = "0.1.0",
        description = "Villas and villa numbers, every response wrapped in an ApiResponse envelope"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/VillaAPI", api = domain_villas::handlers::villa::ApiDoc),
        (path = "/VillaNumberAPI", api = domain_villas::handlers::villa_number::ApiDoc)
    )
)]
pub struct ApiDoc;
