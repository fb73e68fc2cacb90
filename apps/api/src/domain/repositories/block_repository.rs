use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::block::Block;

/// Repository trait for Block aggregate
#[async_trait]
pub trait BlockRepository: Send + Sync {
    /// Insert a new block
    async fn create(&self, block: &Block) -> RepositoryResult<()>;

    /// List all blocks, oldest first
    async fn list(&self) -> RepositoryResult<Vec<Block>>;

    /// Find a block by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Block>>;

    /// Overwrite an existing block
    async fn update(&self, block: &Block) -> RepositoryResult<()>;

    /// Delete a block by ID
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
