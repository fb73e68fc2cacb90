use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::category::{BlockCategory, CategoryName};

/// Repository trait for block categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category; fails with `Duplicate` if the name is taken
    async fn create(&self, category: &BlockCategory) -> RepositoryResult<()>;

    /// List all categories ordered by name
    async fn list(&self) -> RepositoryResult<Vec<BlockCategory>>;

    /// Find a category by its exact name
    async fn find_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<BlockCategory>>;
}
