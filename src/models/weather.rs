//! Weather snapshot model matching the frontend Weather interface.

use serde::{Deserialize, Serialize};

/// Static weather readings shown as stat tiles.
///
/// A singleton fixture for now; a live weather feed may replace it later
/// via the refresh hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Degrees Fahrenheit.
    pub temperature: i32,
    pub condition: String,
    /// Relative humidity percentage.
    pub humidity: u8,
    /// Miles per hour.
    pub wind_speed: u32,
    pub uv_index: u8,
}
