//! Beach catalog API endpoints.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Beach, BeachSelection};
use crate::AppState;

/// GET /api/beaches - List the beach catalog.
pub async fn list_beaches(State(state): State<AppState>) -> ApiResult<Vec<Beach>> {
    let revision_id = state.store.revision_id().await;
    success(state.store.list_beaches().await, revision_id)
}

/// GET /api/beaches/:id - Get a single beach.
pub async fn get_beach(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Beach> {
    let revision_id = state.store.revision_id().await;

    match state.store.get_beach(id).await {
        Some(beach) => success(beach, revision_id),
        None => error(
            AppError::NotFound(format!("Beach {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/beaches/:id/select - Select a beach from the catalog.
///
/// A navigation affordance only: surfaces a notification and tells the client
/// to scroll to the events section. No state changes, no revision bump.
pub async fn select_beach(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<BeachSelection> {
    let revision_id = state.store.revision_id().await;

    match state.store.get_beach(id).await {
        Some(beach) => {
            state
                .notifications
                .push(format!("{} selected! Ready to plan a cleanup?", beach.name))
                .await;
            success(
                BeachSelection {
                    beach,
                    scroll_to: "events",
                },
                revision_id,
            )
        }
        None => error(
            AppError::NotFound(format!("Beach {} not found", id)),
            revision_id,
        ),
    }
}
