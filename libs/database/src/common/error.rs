#[cfg(feature = "postgres")]
use sea_orm::{DbErr, SqlErr};

/// Unified error type for every store operation.
///
/// Constraint violations are split out of the raw driver error so callers
/// can turn them into domain messages without parsing SQL state codes.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(DbErr),

    /// A unique index or primary key rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key rejected the write
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// The row addressed by an update or delete does not exist
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

impl DatabaseError {
    /// True for unique and foreign-key violations.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::UniqueViolation(_) | DatabaseError::ForeignKeyViolation(_)
        )
    }
}

#[cfg(feature = "postgres")]
impl From<DbErr> for DatabaseError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                DatabaseError::UniqueViolation(message)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                DatabaseError::ForeignKeyViolation(message)
            }
            _ => match err {
                DbErr::RecordNotUpdated => {
                    DatabaseError::NotFound("no row matched the primary key".to_string())
                }
                DbErr::RecordNotFound(message) => DatabaseError::NotFound(message),
                other => DatabaseError::Postgres(other),
            },
        }
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(all(test, feature = "postgres"))]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_updated_maps_to_not_found() {
        let err: DatabaseError = DbErr::RecordNotUpdated.into();
        assert!(matches!(err, DatabaseError::NotFound(_)));
    }

    #[test]
    fn test_custom_error_stays_postgres() {
        let err: DatabaseError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, DatabaseError::Postgres(_)));
        assert!(err.to_string().contains("connection reset"));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_constraint_violation_helper() {
        assert!(DatabaseError::UniqueViolation("villas_name_key".into()).is_constraint_violation());
        assert!(
            DatabaseError::ForeignKeyViolation("villa_numbers_villa_id_fkey".into())
                .is_constraint_violation()
        );
        assert!(!DatabaseError::NotFound("villa".into()).is_constraint_violation());
    }
}
