//! Crew member model matching the frontend CrewMember interface.

use serde::{Deserialize, Serialize};

/// A member of the cleanup crew roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    /// Avatar initials shown in the roster, e.g. "AJ".
    pub avatar: String,
}

/// Request body for adding a crew member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCrewMemberRequest {
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// Defaults to initials derived from the name when omitted.
    #[serde(default)]
    pub avatar: Option<String>,
}

fn default_role() -> String {
    "Volunteer".to_string()
}

/// Derive avatar initials from a display name ("Alex Johnson" -> "AJ").
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    letters.to_uppercase()
}
