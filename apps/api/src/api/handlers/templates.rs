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
use crate::domain::template::{Rating, Template};

/// Request body for saving a template
///
/// Same shape as [`TemplateDraft`](crate::domain::template::TemplateDraft);
/// the rating is taken raw so range errors surface as 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Template as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub rating: u8,
    pub tags: Vec<String>,
    /// Tags with duplicates collapsed, in first-seen order
    #[serde(default)]
    pub unique_tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Template> for TemplateResponse {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id(),
            title: template.title().to_string(),
            content: template.content().to_string(),
            rating: template.rating().stars(),
            tags: template.tags().as_slice().to_vec(),
            unique_tags: template.unique_tags(),
            created_at: template.created_at(),
        }
    }
}

/// List all templates, newest first
///
/// GET /api/templates
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemplateResponse>>, ApiError> {
    let templates = state.templates.list().await?;

    Ok(Json(templates.iter().map(TemplateResponse::from).collect()))
}

/// Save a new template
///
/// POST /api/templates
pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<CreateTemplateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
    let Json(req) = payload?;
    let rating = Rating::new(req.rating).map_err(ApiError::bad_request)?;
    let template =
        Template::new(req.title, req.content, rating, req.tags).map_err(ApiError::bad_request)?;

    state.templates.create(&template).await?;
    tracing::info!(template_id = %template.id(), rating = %template.rating(), "Template saved");

    Ok((StatusCode::CREATED, Json(TemplateResponse::from(&template))))
}

/// Delete a template
///
/// DELETE /api/templates/:id
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.templates.delete(id).await?;
    tracing::info!(template_id = %id, "Template deleted");

    Ok(StatusCode::NO_CONTENT)
}
