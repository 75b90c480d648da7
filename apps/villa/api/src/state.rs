//! Application state management.

/// Shared application state.
///
/// Cloned into the readiness handler and used to build the domain routers;
/// the connection pool clone is an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
