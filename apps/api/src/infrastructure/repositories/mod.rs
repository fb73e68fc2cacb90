// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_block_repository;
pub mod postgres_category_repository;
pub mod postgres_template_repository;

pub use in_memory::InMemoryStore;
pub use postgres_block_repository::PostgresBlockRepository;
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_template_repository::PostgresTemplateRepository;

use crate::domain::repositories::RepositoryError;

/// Maps a sqlx failure onto the repository error taxonomy
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "{} failed", context);
    RepositoryError::Database(format!("{}: {}", context, err))
}

/// Like [`map_sqlx_error`], but a unique violation becomes a duplicate of `entity`
pub(crate) fn map_insert_error(entity: &str, err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicate(entity.to_string())
        }
        _ => map_sqlx_error(&format!("Insert {}", entity), err),
    }
}
