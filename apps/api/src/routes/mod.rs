pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::document::handlers;
use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::handlers as suggestion_handlers;

async fn not_found() -> Result<(), AppError> {
    Err(AppError::NotFound("No such route".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document snapshot & rendering
        .route("/api/v1/document", get(handlers::handle_get_document))
        .route("/api/v1/document/view", get(handlers::handle_get_view))
        .route("/api/v1/document/export", get(handlers::handle_export_text))
        // Personal info, summary, skills
        .route(
            "/api/v1/document/personal-info",
            patch(handlers::handle_update_personal_info),
        )
        .route(
            "/api/v1/document/summary",
            put(handlers::handle_update_summary),
        )
        .route(
            "/api/v1/document/skills",
            post(handlers::handle_add_skill).delete(handlers::handle_remove_skill),
        )
        // Entries
        .route(
            "/api/v1/document/entries/:kind",
            post(handlers::handle_add_entry),
        )
        .route(
            "/api/v1/document/entries/:kind/:id",
            patch(handlers::handle_update_field).delete(handlers::handle_remove_entry),
        )
        .route(
            "/api/v1/document/entries/:kind/:id/bullets",
            put(handlers::handle_set_bullets).post(handlers::handle_append_bullet),
        )
        .route(
            "/api/v1/document/entries/:kind/:id/bullets/:index",
            put(handlers::handle_update_bullet).delete(handlers::handle_remove_bullet),
        )
        // Suggestions
        .route(
            "/api/v1/suggestions",
            post(suggestion_handlers::handle_request_suggestions),
        )
        .route(
            "/api/v1/suggestions/status",
            get(suggestion_handlers::handle_suggestion_status),
        )
        .fallback(not_found)
        .with_state(state)
}
