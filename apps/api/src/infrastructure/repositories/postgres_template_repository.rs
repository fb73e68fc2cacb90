use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{map_insert_error, map_sqlx_error};
use crate::domain::repositories::{RepositoryError, RepositoryResult, TemplateRepository};
use crate::domain::template::{Rating, Template};

/// PostgreSQL implementation of TemplateRepository
pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TemplateRow {
    id: Uuid,
    title: String,
    content: String,
    rating: i16,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TemplateRow> for Template {
    type Error = RepositoryError;

    fn try_from(r: TemplateRow) -> Result<Self, Self::Error> {
        let rating = Rating::new(i64::from(r.rating)).map_err(RepositoryError::Database)?;
        Ok(Template::from_persistence(
            r.id,
            r.title,
            r.content,
            rating,
            r.tags,
            r.created_at,
        ))
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn create(&self, template: &Template) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO templates (id, title, content, rating, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(template.id())
        .bind(template.title())
        .bind(template.content())
        .bind(i16::from(template.rating().stars()))
        .bind(template.tags().as_slice().to_vec())
        .bind(template.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&format!("Template {}", template.id()), e))?;

        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Template>> {
        let rows = sqlx::query_as::<_, TemplateRow>(
            r#"
            SELECT id, title, content, rating, tags, created_at
            FROM templates
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("List templates", e))?;

        rows.into_iter().map(Template::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Delete template", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Template",
                id,
            });
        }

        Ok(())
    }
}
