//! Cleanup event model matching the frontend Event interface.

use serde::{Deserialize, Serialize};

/// Fallback description for events submitted with a blank description field.
pub const DEFAULT_EVENT_DESCRIPTION: &str = "Community beach cleanup";

/// Display label for events created without a cataloged beach.
pub const PLACEHOLDER_BEACH_LABEL: &str = "User Location";

/// A scheduled beach cleanup event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupEvent {
    pub id: u64,
    pub name: String,
    /// Catalog reference; `None` for events pinned to the submitter's own
    /// location rather than a known beach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beach_id: Option<u64>,
    /// Denormalized beach label for display, resolved at creation time.
    pub beach_name: String,
    /// ISO calendar date (yyyy-mm-dd).
    pub date: String,
    /// 24-hour wall-clock time (HH:MM).
    pub time: String,
    pub attendees: u32,
    pub description: String,
}

/// Request body for creating a new cleanup event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Optional catalog reference; must name an existing beach when present.
    #[serde(default)]
    pub beach_id: Option<u64>,
}
