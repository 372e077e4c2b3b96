//! Axum route handlers for the Suggestions API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::document::{BulletKind, Document, EntityId};
use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::{SuggestionContext, SuggestionOutcome};

#[derive(Debug, Deserialize)]
pub struct SuggestionRequestBody {
    #[serde(rename = "type")]
    pub kind: BulletKind,
    pub id: EntityId,
    /// Free-text hint; the default hint for the kind is used when absent.
    pub hint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    #[serde(flatten)]
    pub outcome: SuggestionOutcome,
    pub document: Arc<Document>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionStatus {
    pub busy: bool,
}

/// POST /api/v1/suggestions
///
/// Builds the context from the current snapshot and runs one suggestion
/// request. Busy and failed outcomes are reported in the body, not as errors.
pub async fn handle_request_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequestBody>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let snapshot = state.store.snapshot();
    let context = SuggestionContext::from_document(
        &snapshot,
        request.kind,
        request.id,
        request.hint.as_deref(),
    )
    .ok_or_else(|| {
        AppError::NotFound(format!("{} entry {} not found", request.kind.as_str(), request.id))
    })?;

    let outcome = state
        .coordinator
        .request_suggestions(request.id, context)
        .await;

    Ok(Json(SuggestionResponse {
        outcome,
        document: state.store.snapshot(),
    }))
}

/// GET /api/v1/suggestions/status
pub async fn handle_suggestion_status(State(state): State<AppState>) -> Json<SuggestionStatus> {
    Json(SuggestionStatus {
        busy: state.coordinator.is_busy(),
    })
}
