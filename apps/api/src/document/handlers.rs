//! Axum route handlers for the Document API.
//!
//! Every mutation returns the snapshot that is current afterwards. References
//! to entries or bullets that do not exist are no-ops, so these handlers only
//! fail when axum cannot parse the request itself.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::document::{BulletKind, Document, EntityId, EntryKind};
use crate::render::{render, render_text, DocumentView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ValueUpdate {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Deserialize)]
pub struct BulletsReplace {
    pub bullets: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EntryCreatedResponse {
    pub id: EntityId,
    pub document: Arc<Document>,
}

// ────────────────────────────────────────────────────────────────────────────
// Snapshot & rendering
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<Arc<Document>> {
    Json(state.store.snapshot())
}

/// GET /api/v1/document/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<DocumentView> {
    Json(render(&state.store.snapshot()))
}

/// GET /api/v1/document/export
///
/// Plain-text printable rendering of the current snapshot.
pub async fn handle_export_text(State(state): State<AppState>) -> impl IntoResponse {
    let text = render_text(&render(&state.store.snapshot()));
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info, summary, skills
// ────────────────────────────────────────────────────────────────────────────

/// PATCH /api/v1/document/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Json(req): Json<FieldUpdate>,
) -> Json<Arc<Document>> {
    Json(
        state
            .store
            .apply(|d| d.update_personal_info(&req.field, &req.value)),
    )
}

/// PUT /api/v1/document/summary
pub async fn handle_update_summary(
    State(state): State<AppState>,
    Json(req): Json<ValueUpdate>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.update_summary(&req.value)))
}

/// POST /api/v1/document/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.add_skill(&req.skill)))
}

/// DELETE /api/v1/document/skills
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.remove_skill(&req.skill)))
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/document/entries/:kind
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(kind): Path<EntryKind>,
) -> (StatusCode, Json<EntryCreatedResponse>) {
    let (document, id) = state.store.add_entry(kind);
    (
        StatusCode::CREATED,
        Json(EntryCreatedResponse { id, document }),
    )
}

/// PATCH /api/v1/document/entries/:kind/:id
pub async fn handle_update_field(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntryKind, EntityId)>,
    Json(req): Json<FieldUpdate>,
) -> Json<Arc<Document>> {
    Json(
        state
            .store
            .apply(|d| d.update_field(kind, id, &req.field, &req.value)),
    )
}

/// DELETE /api/v1/document/entries/:kind/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntryKind, EntityId)>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.remove_entry(kind, id)))
}

// ────────────────────────────────────────────────────────────────────────────
// Bullets
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/document/entries/:kind/:id/bullets
pub async fn handle_set_bullets(
    State(state): State<AppState>,
    Path((kind, id)): Path<(BulletKind, EntityId)>,
    Json(req): Json<BulletsReplace>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.set_bullets(kind, id, req.bullets)))
}

/// POST /api/v1/document/entries/:kind/:id/bullets
pub async fn handle_append_bullet(
    State(state): State<AppState>,
    Path((kind, id)): Path<(BulletKind, EntityId)>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.append_bullet(kind, id)))
}

/// PUT /api/v1/document/entries/:kind/:id/bullets/:index
pub async fn handle_update_bullet(
    State(state): State<AppState>,
    Path((kind, id, index)): Path<(BulletKind, EntityId, usize)>,
    Json(req): Json<ValueUpdate>,
) -> Json<Arc<Document>> {
    Json(
        state
            .store
            .apply(|d| d.update_bullet(kind, id, index, &req.value)),
    )
}

/// DELETE /api/v1/document/entries/:kind/:id/bullets/:index
pub async fn handle_remove_bullet(
    State(state): State<AppState>,
    Path((kind, id, index)): Path<(BulletKind, EntityId, usize)>,
) -> Json<Arc<Document>> {
    Json(state.store.apply(|d| d.remove_bullet(kind, id, index)))
}
