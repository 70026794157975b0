//! Weather API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::WeatherSnapshot;
use crate::AppState;

/// GET /api/weather - Get the current weather snapshot.
pub async fn get_weather(State(state): State<AppState>) -> ApiResult<WeatherSnapshot> {
    let revision_id = state.store.revision_id().await;
    success(state.store.weather().await, revision_id)
}

/// POST /api/weather/refresh - Refresh the weather snapshot.
///
/// Placeholder for a live weather API integration; returns the static
/// snapshot unchanged.
pub async fn refresh_weather(State(state): State<AppState>) -> ApiResult<WeatherSnapshot> {
    if let Some(url) = &state.config.weather_api_url {
        tracing::info!(%url, "weather endpoint configured but live fetch is not implemented");
    }

    let revision_id = state.store.revision_id().await;
    success(state.store.refresh_weather().await, revision_id)
}
