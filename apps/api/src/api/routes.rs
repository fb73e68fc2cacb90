use axum::{
    routing::{delete, get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{blocks, categories, health, templates};
use super::state::AppState;

/// Builds the HTTP router with all resource routes and middleware
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Block routes
        .route("/api/blocks", get(blocks::list_blocks).post(blocks::create_block))
        .route(
            "/api/blocks/:id",
            patch(blocks::update_block).delete(blocks::delete_block),
        )
        // Block category routes
        .route(
            "/api/block-categories",
            get(categories::list_categories).post(categories::create_category),
        )
        // Template routes
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/api/templates/:id", delete(templates::delete_template))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
