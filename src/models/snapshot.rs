//! Application snapshot model matching the frontend state shape.

use serde::{Deserialize, Serialize};

use super::{Beach, CleanupEvent, CrewMember, UserProfile, WeatherSnapshot};

/// Visibility state of the event-creation dialog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DialogState {
    Open,
    Closed,
}

/// The full application state as one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub schema_version: i32,
    pub generated_at: String,
    pub revision_id: i64,
    pub user: UserProfile,
    pub crew: Vec<CrewMember>,
    pub beaches: Vec<Beach>,
    pub events: Vec<CleanupEvent>,
    pub weather: WeatherSnapshot,
    pub dialog: DialogState,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
