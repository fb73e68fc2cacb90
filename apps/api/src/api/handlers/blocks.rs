use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::block::{Block, BlockChanges};
use crate::domain::builder::BlockSnapshot;

/// Request body for creating a block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlockRequest {
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for updating a block; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlockRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Block as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockResponse {
    pub id: Uuid,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlockResponse {
    /// Copies the block's payload for a library drag
    pub fn snapshot(&self) -> BlockSnapshot {
        BlockSnapshot::new(
            self.content.clone(),
            Some(self.category.clone()),
            self.tags.clone(),
        )
    }
}

impl From<&Block> for BlockResponse {
    fn from(block: &Block) -> Self {
        Self {
            id: block.id(),
            content: block.content().to_string(),
            category: block.category().to_string(),
            tags: block.tags().as_slice().to_vec(),
            created_at: block.created_at(),
            updated_at: block.updated_at(),
        }
    }
}

/// List all blocks
///
/// GET /api/blocks
pub async fn list_blocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlockResponse>>, ApiError> {
    let blocks = state.blocks.list().await?;

    Ok(Json(blocks.iter().map(BlockResponse::from).collect()))
}

/// Create a new block
///
/// POST /api/blocks
pub async fn create_block(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlockRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BlockResponse>), ApiError> {
    let Json(req) = payload?;
    let block = Block::new(req.content, req.category, req.tags).map_err(ApiError::bad_request)?;

    state.blocks.create(&block).await?;
    tracing::info!(block_id = %block.id(), category = block.category(), "Block created");

    Ok((StatusCode::CREATED, Json(BlockResponse::from(&block))))
}

/// Update an existing block
///
/// PATCH /api/blocks/:id
pub async fn update_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateBlockRequest>, JsonRejection>,
) -> Result<Json<BlockResponse>, ApiError> {
    let Json(req) = payload?;
    let mut block = state
        .blocks
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Block not found: {}", id)))?;

    block
        .revise(BlockChanges {
            content: req.content,
            category: req.category,
            tags: req.tags,
        })
        .map_err(ApiError::bad_request)?;

    state.blocks.update(&block).await?;
    tracing::info!(block_id = %id, "Block updated");

    Ok(Json(BlockResponse::from(&block)))
}

/// Delete a block
///
/// DELETE /api/blocks/:id
pub async fn delete_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.blocks.delete(id).await?;
    tracing::info!(block_id = %id, "Block deleted");

    Ok(StatusCode::NO_CONTENT)
}
