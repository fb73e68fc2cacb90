use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{BlockRepository, CategoryRepository, TemplateRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresBlockRepository, PostgresCategoryRepository,
    PostgresTemplateRepository,
};

/// Shared handler state: one repository per resource
#[derive(Clone)]
pub struct AppState {
    pub blocks: Arc<dyn BlockRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub templates: Arc<dyn TemplateRepository>,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            blocks: Arc::new(PostgresBlockRepository::new(pool.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
            templates: Arc::new(PostgresTemplateRepository::new(pool)),
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            blocks: store.clone(),
            categories: store.clone(),
            templates: store,
        }
    }
}
