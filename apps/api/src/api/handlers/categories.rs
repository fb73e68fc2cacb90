use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::category::{BlockCategory, CategoryName};

/// Request body for creating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Category as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&BlockCategory> for CategoryResponse {
    fn from(category: &BlockCategory) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
        }
    }
}

/// List all block categories
///
/// GET /api/block-categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state.categories.list().await?;

    Ok(Json(categories.iter().map(CategoryResponse::from).collect()))
}

/// Create a new block category
///
/// POST /api/block-categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let Json(req) = payload?;
    let name = CategoryName::new(&req.name).map_err(ApiError::bad_request)?;

    if state.categories.find_by_name(&name).await?.is_some() {
        return Err(ApiError::conflict("Category already exists"));
    }

    let category = BlockCategory::new(name);
    state.categories.create(&category).await?;
    tracing::info!(category = %category.name(), "Category created");

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(&category))))
}
