use thiserror::Error;
use uuid::Uuid;

/// Errors returned by repository implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
