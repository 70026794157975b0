//! Transient notification model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A transient toast message shown after an operation.
///
/// Notifications are not part of the application snapshot; they auto-dismiss
/// after the configured TTL or on explicit dismissal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub created_at: String,
}
