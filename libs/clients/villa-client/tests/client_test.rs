//! Client tests against the real routers on an ephemeral port.

use axum::Router;
use axum_helpers::ApiResponse;
use domain_villas::{
    InMemoryVillaNumberRepository, InMemoryVillaRepository, VillaCreateDto, VillaDto,
    VillaNumberCreateDto, VillaNumberDto, VillaNumberService as NumberDomainService,
    VillaService as VillaDomainService, VillaUpdateDto, handlers,
};
use villa_client::{
    ClientConfig, VillaNumberService, VillaNumberServiceClient, VillaService, VillaServiceClient,
};

async fn spawn_api() -> ClientConfig {
    let villas = InMemoryVillaRepository::new();
    let numbers = InMemoryVillaNumberRepository::new();

    let app = Router::new()
        .nest(
            "/api/VillaAPI",
            handlers::villa::router(VillaDomainService::new(villas.clone())),
        )
        .nest(
            "/api/VillaNumberAPI",
            handlers::villa_number::router(NumberDomainService::new(numbers, villas)),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ClientConfig::new(format!("http://{addr}"))
}

fn pool_view() -> VillaCreateDto {
    VillaCreateDto {
        name: "Pool View".into(),
        rate: 100.0,
        occupancy: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_then_get_villa() {
    let client = VillaServiceClient::new(&spawn_api().await);

    let created: ApiResponse<VillaDto> = client.create(&pool_view()).await.unwrap();
    assert_eq!(created.status_code(), 201);
    let id = created.result().unwrap().id;

    let fetched: ApiResponse<VillaDto> = client.get(id).await.unwrap();
    assert!(fetched.is_success());
    assert_eq!(fetched.result().unwrap().name, "Pool View");

    let all: ApiResponse<Vec<VillaDto>> = client.get_all().await.unwrap();
    assert_eq!(all.into_result().unwrap().len(), 1);
}

#[tokio::test]
async fn test_error_statuses_still_decode_as_envelopes() {
    let client = VillaServiceClient::new(&spawn_api().await);

    let missing: ApiResponse<VillaDto> = client.get(999).await.unwrap();
    assert_eq!(missing.status_code(), 404);
    assert!(!missing.is_success());

    client
        .create::<ApiResponse<VillaDto>>(&pool_view())
        .await
        .unwrap();
    let duplicate: ApiResponse<VillaDto> = client.create(&pool_view()).await.unwrap();
    assert_eq!(duplicate.status_code(), 400);
    assert_eq!(duplicate.error_messages(), ["Villa already Exists!"]);
}

#[tokio::test]
async fn test_update_and_delete_villa() {
    let client = VillaServiceClient::new(&spawn_api().await);
    let created: ApiResponse<VillaDto> = client.create(&pool_view()).await.unwrap();
    let id = created.result().unwrap().id;

    let updated: ApiResponse<()> = client
        .update(&VillaUpdateDto {
            id,
            name: "Pool View".into(),
            rate: 180.0,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.status_code(), 204);

    let deleted: ApiResponse<()> = client.delete(id).await.unwrap();
    assert_eq!(deleted.status_code(), 204);

    let gone: ApiResponse<VillaDto> = client.get(id).await.unwrap();
    assert_eq!(gone.status_code(), 404);
}

#[tokio::test]
async fn test_villa_number_client() {
    let config = spawn_api().await;
    let villas = VillaServiceClient::new(&config);
    let numbers = VillaNumberServiceClient::new(&config);

    let villa: ApiResponse<VillaDto> = villas.create(&pool_view()).await.unwrap();
    let villa_id = villa.result().unwrap().id;

    let created: ApiResponse<VillaNumberDto> = numbers
        .create(&VillaNumberCreateDto {
            villa_no: 301,
            villa_id,
            special_details: "Top floor".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.status_code(), 201);

    let invalid: ApiResponse<VillaNumberDto> = numbers
        .create(&VillaNumberCreateDto {
            villa_no: 302,
            villa_id: villa_id + 100,
            special_details: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(invalid.error_messages(), ["Villa ID is Invalid!"]);

    let listed: ApiResponse<Vec<VillaNumberDto>> = numbers.get_all().await.unwrap();
    assert_eq!(listed.into_result().unwrap()[0].villa_no, 301);
}
