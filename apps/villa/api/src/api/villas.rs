use axum::Router;
use domain_villas::{
    PgVillaNumberRepository, PgVillaRepository, VillaNumberService, VillaService, handlers,
};

pub fn villa_router(state: &crate::state::AppState) -> Router {
    let repository = PgVillaRepository::new(state.db.clone());
    handlers::villa::router(VillaService::new(repository))
}

pub fn villa_number_router(state: &crate::state::AppState) -> Router {
    let numbers = PgVillaNumberRepository::new(state.db.clone());
    let villas = PgVillaRepository::new(state.db.clone());
    handlers::villa_number::router(VillaNumberService::new(numbers, villas))
}
