//! Rendered HTML fragment endpoints.
//!
//! Each endpoint regenerates the full markup for one page section from the
//! current state. Fragments are full-replace: the client swaps its container
//! children for the returned markup.

use axum::{extract::State, response::Html};

use crate::render;
use crate::AppState;

/// GET /api/fragments/beaches - Beach catalog cards.
pub async fn beaches_fragment(State(state): State<AppState>) -> Html<String> {
    Html(render::beach_grid(&state.store.list_beaches().await))
}

/// GET /api/fragments/crew - Crew roster rows.
pub async fn crew_fragment(State(state): State<AppState>) -> Html<String> {
    Html(render::crew_roster(&state.store.list_crew().await))
}

/// GET /api/fragments/events - Event cards.
pub async fn events_fragment(State(state): State<AppState>) -> Html<String> {
    Html(render::event_list(&state.store.list_events().await))
}

/// GET /api/fragments/weather - Weather stat tiles.
pub async fn weather_fragment(State(state): State<AppState>) -> Html<String> {
    Html(render::weather_panel(&state.store.weather().await))
}

/// GET /api/fragments/dialog - The event-creation dialog.
pub async fn dialog_fragment(State(state): State<AppState>) -> Html<String> {
    Html(render::event_dialog(state.store.dialog().await))
}
