//! Event-creation dialog API endpoints.
//!
//! The dialog has exactly two states. It opens on the create affordance and
//! closes on the close control, on background activation, or when an event
//! submission succeeds (handled in the store).

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::DialogState;
use crate::AppState;

/// GET /api/dialog - Get the dialog state.
pub async fn get_dialog(State(state): State<AppState>) -> ApiResult<DialogState> {
    let revision_id = state.store.revision_id().await;
    success(state.store.dialog().await, revision_id)
}

/// POST /api/dialog/open - Open the event-creation dialog.
pub async fn open_dialog(State(state): State<AppState>) -> ApiResult<DialogState> {
    let dialog = state.store.open_dialog().await;
    let revision_id = state.store.revision_id().await;
    success(dialog, revision_id)
}

/// POST /api/dialog/close - Close the event-creation dialog.
pub async fn close_dialog(State(state): State<AppState>) -> ApiResult<DialogState> {
    let dialog = state.store.close_dialog().await;
    let revision_id = state.store.revision_id().await;
    success(dialog, revision_id)
}
