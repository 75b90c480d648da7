use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::patch::PatchError;

#[derive(Debug, Error)]
pub enum VillaError {
    #[error("Id must be a positive integer, got {0}")]
    InvalidId(i32),

    #[error("Route id {route} does not match body id {body}")]
    IdMismatch { route: i32, body: i32 },

    #[error("Villa {0} not found")]
    NotFound(i32),

    /// PATCH reports a missing target as a bad request rather than 404
    #[error("Villa {0} does not exist")]
    PatchTargetMissing(i32),

    #[error("Villa number {0} not found")]
    VillaNumberNotFound(i32),

    #[error("Villa Number {0} does not exist")]
    VillaNumberPatchTargetMissing(i32),

    #[error("Villa already Exists!")]
    DuplicateName,

    #[error("Villa Number already Exists!")]
    DuplicateVillaNumber,

    #[error("Villa ID is Invalid!")]
    InvalidVillaId,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid patch document: {0}")]
    InvalidPatch(#[from] PatchError),

    #[error("Store error: {0}")]
    Store(#[from] DatabaseError),
}

pub type VillaResult<T> = Result<T, VillaError>;

impl From<VillaError> for AppError {
    fn from(err: VillaError) -> Self {
        match err {
            VillaError::InvalidId(_) => AppError::InvalidId(err.to_string()),
            VillaError::NotFound(_) | VillaError::VillaNumberNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            VillaError::Validation(errors) => AppError::ValidationError(errors),
            // Store failures are never constraint outcomes by the time they get here.
            VillaError::Store(db) => AppError::Database(db.to_string()),
            VillaError::IdMismatch { .. }
            | VillaError::PatchTargetMissing(_)
            | VillaError::VillaNumberPatchTargetMissing(_)
            | VillaError::DuplicateName
            | VillaError::DuplicateVillaNumber
            | VillaError::InvalidVillaId
            | VillaError::InvalidPatch(_) => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for VillaError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
