//! Snapshot API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{AppSnapshot, RevisionInfo};
use crate::AppState;

/// GET /api/snapshot - Get the full application state.
pub async fn get_snapshot(State(state): State<AppState>) -> ApiResult<AppSnapshot> {
    let snapshot = state.store.snapshot().await;
    let revision_id = snapshot.revision_id;
    success(snapshot, revision_id)
}

/// GET /api/snapshot/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info = state.store.revision_info().await;
    let revision_id = revision_info.revision_id;
    success(revision_info, revision_id)
}
