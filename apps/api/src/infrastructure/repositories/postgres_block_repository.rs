use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{map_insert_error, map_sqlx_error};
use crate::domain::block::Block;
use crate::domain::repositories::{BlockRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of BlockRepository
pub struct PostgresBlockRepository {
    pool: PgPool,
}

impl PostgresBlockRepository {
    /// Creates a new PostgresBlockRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlockRow {
    id: Uuid,
    content: String,
    category: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlockRow> for Block {
    fn from(r: BlockRow) -> Self {
        Block::from_persistence(r.id, r.content, r.category, r.tags, r.created_at, r.updated_at)
    }
}

#[async_trait]
impl BlockRepository for PostgresBlockRepository {
    async fn create(&self, block: &Block) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blocks (id, content, category, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(block.id())
        .bind(block.content())
        .bind(block.category())
        .bind(block.tags().as_slice().to_vec())
        .bind(block.created_at())
        .bind(block.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&format!("Block {}", block.id()), e))?;

        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Block>> {
        let rows = sqlx::query_as::<_, BlockRow>(
            r#"
            SELECT id, content, category, tags, created_at, updated_at
            FROM blocks
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("List blocks", e))?;

        Ok(rows.into_iter().map(Block::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Block>> {
        let row = sqlx::query_as::<_, BlockRow>(
            r#"
            SELECT id, content, category, tags, created_at, updated_at
            FROM blocks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Find block", e))?;

        Ok(row.map(Block::from))
    }

    async fn update(&self, block: &Block) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE blocks
            SET content = $2, category = $3, tags = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(block.id())
        .bind(block.content())
        .bind(block.category())
        .bind(block.tags().as_slice().to_vec())
        .bind(block.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Update block", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Block",
                id: block.id(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM blocks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Delete block", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { entity: "Block", id });
        }

        Ok(())
    }
}
