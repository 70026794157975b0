//! Crew roster API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateCrewMemberRequest, CrewMember, Notification};
use crate::AppState;

/// GET /api/crew - List the crew roster.
pub async fn list_crew(State(state): State<AppState>) -> ApiResult<Vec<CrewMember>> {
    let revision_id = state.store.revision_id().await;
    success(state.store.list_crew().await, revision_id)
}

/// GET /api/crew/:id - Get a single crew member.
pub async fn get_crew_member(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<CrewMember> {
    let revision_id = state.store.revision_id().await;

    match state.store.get_crew_member(id).await {
        Some(member) => success(member, revision_id),
        None => error(
            AppError::NotFound(format!("Crew member {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/crew - Add a crew member.
pub async fn add_crew_member(
    State(state): State<AppState>,
    Json(request): Json<CreateCrewMemberRequest>,
) -> ApiResult<CrewMember> {
    let member = state.store.add_crew_member(&request).await;
    state
        .notifications
        .push(format!("{} added to your crew!", member.name))
        .await;

    let revision_id = state.store.revision_id().await;
    success(member, revision_id)
}

/// DELETE /api/crew/:id - Remove a crew member.
pub async fn remove_crew_member(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    let revision_id = state.store.revision_id().await;

    match state.store.remove_crew_member(id).await {
        Ok(member) => {
            state
                .notifications
                .push(format!("{} removed from crew.", member.name))
                .await;

            let new_revision = state.store.revision_id().await;
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/crew/:id/message - Open a chat with a crew member.
///
/// There is no real messaging; the response is the notification itself.
pub async fn message_crew_member(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Notification> {
    let revision_id = state.store.revision_id().await;

    match state.store.get_crew_member(id).await {
        Some(member) => {
            let notification = state
                .notifications
                .push(format!("Opening chat with {}...", member.name))
                .await;
            success(notification, revision_id)
        }
        None => error(
            AppError::NotFound(format!("Crew member {} not found", id)),
            revision_id,
        ),
    }
}
