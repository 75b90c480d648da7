//! Integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for `{id}` path segments holding an `i32`.
///
/// A segment that is not an integer is rejected with a 400 envelope. Range
/// checks (`id > 0`) stay with the service so they are enforced for every
/// caller, not only HTTP.
///
/// # Example
/// ```ignore
/// async fn get_villa(IdPath(id): IdPath) -> String {
///     format!("Villa {}", id)
/// }
///
/// let app = Router::new().route("/VillaAPI/{id}", get(get_villa));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state).await?;
        Ok(IdPath(id))
    }
}
