use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::template::Template;

/// Repository trait for Template aggregate
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Insert a new template
    async fn create(&self, template: &Template) -> RepositoryResult<()>;

    /// List all templates, newest first
    async fn list(&self) -> RepositoryResult<Vec<Template>>;

    /// Delete a template by ID
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
