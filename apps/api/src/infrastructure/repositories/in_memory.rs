use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::block::Block;
use crate::domain::category::{BlockCategory, CategoryName};
use crate::domain::repositories::{
    BlockRepository, CategoryRepository, RepositoryError, RepositoryResult, TemplateRepository,
};
use crate::domain::template::Template;

/// Process-local storage for all resources
///
/// Used when no database is configured and by the test suites. Records
/// keep insertion order; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blocks: RwLock<Vec<Block>>,
    categories: RwLock<Vec<BlockCategory>>,
    templates: RwLock<Vec<Template>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlockRepository for InMemoryStore {
    async fn create(&self, block: &Block) -> RepositoryResult<()> {
        let mut blocks = self.blocks.write().await;
        if blocks.iter().any(|b| b.id() == block.id()) {
            return Err(RepositoryError::Duplicate(format!("Block {}", block.id())));
        }
        blocks.push(block.clone());
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Block>> {
        Ok(self.blocks.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Block>> {
        Ok(self
            .blocks
            .read()
            .await
            .iter()
            .find(|b| b.id() == id)
            .cloned())
    }

    async fn update(&self, block: &Block) -> RepositoryResult<()> {
        let mut blocks = self.blocks.write().await;
        let slot = blocks
            .iter_mut()
            .find(|b| b.id() == block.id())
            .ok_or(RepositoryError::NotFound {
                entity: "Block",
                id: block.id(),
            })?;
        *slot = block.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut blocks = self.blocks.write().await;
        let before = blocks.len();
        blocks.retain(|b| b.id() != id);
        if blocks.len() == before {
            return Err(RepositoryError::NotFound { entity: "Block", id });
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn create(&self, category: &BlockCategory) -> RepositoryResult<()> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.name() == category.name()) {
            return Err(RepositoryError::Duplicate(format!(
                "Category '{}'",
                category.name()
            )));
        }
        categories.push(category.clone());
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<BlockCategory>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| {
            let (a, b) = (a.name().as_str(), b.name().as_str());
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
        });
        Ok(categories)
    }

    async fn find_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<BlockCategory>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.name() == name)
            .cloned())
    }
}

#[async_trait]
impl TemplateRepository for InMemoryStore {
    async fn create(&self, template: &Template) -> RepositoryResult<()> {
        self.templates.write().await.push(template.clone());
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Template>> {
        Ok(self.templates.read().await.iter().rev().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut templates = self.templates.write().await;
        let before = templates.len();
        templates.retain(|t| t.id() != id);
        if templates.len() == before {
            return Err(RepositoryError::NotFound {
                entity: "Template",
                id,
            });
        }
        Ok(())
    }
}
