use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{map_insert_error, map_sqlx_error};
use crate::domain::category::{BlockCategory, CategoryName};
use crate::domain::repositories::{CategoryRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of CategoryRepository
///
/// Name uniqueness is enforced by the `block_categories.name` unique index.
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for BlockCategory {
    type Error = RepositoryError;

    fn try_from(r: CategoryRow) -> Result<Self, Self::Error> {
        let name = CategoryName::new(&r.name).map_err(RepositoryError::Database)?;
        Ok(BlockCategory::from_persistence(r.id, name, r.created_at))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: &BlockCategory) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO block_categories (id, name, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(category.id())
        .bind(category.name().as_str())
        .bind(category.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&format!("Category '{}'", category.name()), e))?;

        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<BlockCategory>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at
            FROM block_categories
            ORDER BY LOWER(name) ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("List categories", e))?;

        rows.into_iter().map(BlockCategory::try_from).collect()
    }

    async fn find_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<BlockCategory>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at
            FROM block_categories
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Find category", e))?;

        row.map(BlockCategory::try_from).transpose()
    }
}
