//! User profile model matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// The organizing user. A single instance, read-only after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Avatar initials, e.g. "YN".
    pub avatar: String,
    pub role: String,
}
