//! ShoreSquad Backend
//!
//! REST backend for the beach cleanup organizer: an in-memory state store
//! (crew, beaches, events, weather) with rendered HTML fragments per section.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod notify;
mod render;
mod store;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use notify::NotificationCenter;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub notifications: NotificationCenter,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ShoreSquad Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (SHORESQUAD_API_PSK). Authentication is disabled!");
    }
    if config.weather_api_url.is_none() {
        tracing::info!("No weather endpoint configured; serving the static snapshot");
    }

    // Seed the in-memory store; nothing survives a restart
    let store = Arc::new(Store::seeded());
    let snapshot = store.snapshot().await;
    tracing::info!(
        "Seeded {} beaches, {} crew members, {} events",
        snapshot.beaches.len(),
        snapshot.crew.len(),
        snapshot.events.len()
    );

    let notifications =
        NotificationCenter::new(Duration::from_millis(config.notification_ttl_ms));

    // Create application state
    let state = AppState {
        store,
        notifications,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Snapshot
        .route("/snapshot", get(api::get_snapshot))
        .route("/snapshot/revision", get(api::get_revision))
        // Beaches
        .route("/beaches", get(api::list_beaches))
        .route("/beaches/{id}", get(api::get_beach))
        .route("/beaches/{id}/select", post(api::select_beach))
        // Crew
        .route("/crew", get(api::list_crew))
        .route("/crew", post(api::add_crew_member))
        .route("/crew/{id}", get(api::get_crew_member))
        .route("/crew/{id}", delete(api::remove_crew_member))
        .route("/crew/{id}/message", post(api::message_crew_member))
        // Events
        .route("/events", get(api::list_events))
        .route("/events", post(api::create_event))
        .route("/events/{id}", get(api::get_event))
        .route("/events/{id}/join", post(api::join_event))
        // Weather
        .route("/weather", get(api::get_weather))
        .route("/weather/refresh", post(api::refresh_weather))
        // Dialog
        .route("/dialog", get(api::get_dialog))
        .route("/dialog/open", post(api::open_dialog))
        .route("/dialog/close", post(api::close_dialog))
        // Notifications
        .route("/notifications", get(api::list_notifications))
        .route("/notifications/{id}", delete(api::dismiss_notification))
        // Rendered fragments
        .route("/fragments/beaches", get(api::beaches_fragment))
        .route("/fragments/crew", get(api::crew_fragment))
        .route("/fragments/events", get(api::events_fragment))
        .route("/fragments/weather", get(api::weather_fragment))
        .route("/fragments/dialog", get(api::dialog_fragment))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
