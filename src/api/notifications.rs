//! Notification API endpoints.

use axum::extract::{Path, State};
use uuid::Uuid;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::Notification;
use crate::AppState;

/// GET /api/notifications - List the currently visible notifications.
pub async fn list_notifications(State(state): State<AppState>) -> ApiResult<Vec<Notification>> {
    let revision_id = state.store.revision_id().await;
    success(state.notifications.list().await, revision_id)
}

/// DELETE /api/notifications/:id - Dismiss a notification before its timer fires.
pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let revision_id = state.store.revision_id().await;

    if state.notifications.dismiss(id).await {
        success((), revision_id)
    } else {
        error(
            AppError::NotFound(format!("Notification {} not found", id)),
            revision_id,
        )
    }
}
