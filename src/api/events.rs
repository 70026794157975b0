//! Event API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CleanupEvent, CreateEventRequest};
use crate::AppState;

/// GET /api/events - List all scheduled events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<CleanupEvent>> {
    let revision_id = state.store.revision_id().await;
    success(state.store.list_events().await, revision_id)
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<CleanupEvent> {
    let revision_id = state.store.revision_id().await;

    match state.store.get_event(id).await {
        Some(event) => success(event, revision_id),
        None => error(
            AppError::NotFound(format!("Event {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/events - Create a new event from the dialog form.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<CleanupEvent> {
    let revision_id = state.store.revision_id().await;

    match state.store.create_event(&request).await {
        Ok(event) => {
            state
                .notifications
                .push(format!("Event \"{}\" created successfully!", event.name))
                .await;

            let new_revision = state.store.revision_id().await;
            success(event, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/events/:id/join - Join an event.
pub async fn join_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<CleanupEvent> {
    let revision_id = state.store.revision_id().await;

    match state.store.join_event(id).await {
        Ok(event) => {
            state
                .notifications
                .push(format!("You joined \"{}\"! See you at the beach!", event.name))
                .await;

            let new_revision = state.store.revision_id().await;
            success(event, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
