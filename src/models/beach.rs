//! Beach catalog model matching the frontend Beach interface.

use serde::{Deserialize, Serialize};

/// Cleanup difficulty classification for a beach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Geographic coordinates of a beach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A beach available for cleanup events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beach {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub image: String,
    pub coords: Coordinates,
}

/// Response body for selecting a beach from the catalog.
///
/// Selection is a navigation affordance only: the client scrolls to the
/// section named by `scroll_to`, no state changes server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachSelection {
    pub beach: Beach,
    pub scroll_to: &'static str,
}
