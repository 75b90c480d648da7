//! Connection cleanup during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM pool and log the outcome.
///
/// The pool also closes on drop; closing explicitly makes the shutdown
/// sequence visible in the logs.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
