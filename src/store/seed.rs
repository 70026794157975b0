//! Startup fixture data.
//!
//! The store is reseeded from these values on every launch; there is no
//! persistence between sessions.

use crate::models::{
    Beach, CleanupEvent, Coordinates, CrewMember, Difficulty, UserProfile, WeatherSnapshot,
};

use super::StoreData;

/// Build the initial application state.
pub fn initial_state() -> StoreData {
    StoreData {
        user: UserProfile {
            name: "Your Name".to_string(),
            avatar: "YN".to_string(),
            role: "Organizer".to_string(),
        },
        crew: vec![
            crew_member(1, "Alex Johnson", "Co-organizer", "AJ"),
            crew_member(2, "Jordan Lee", "Volunteer", "JL"),
            crew_member(3, "Sam Taylor", "Volunteer", "ST"),
        ],
        beaches: vec![
            Beach {
                id: 1,
                name: "Sunset Beach".to_string(),
                location: "Santa Monica, CA".to_string(),
                difficulty: Difficulty::Easy,
                description: "Beautiful sandy beach with excellent cleanup opportunities."
                    .to_string(),
                image: "https://via.placeholder.com/400x300?text=Sunset+Beach".to_string(),
                coords: Coordinates {
                    lat: 34.0195,
                    lng: -118.4912,
                },
            },
            Beach {
                id: 2,
                name: "Crystal Cove".to_string(),
                location: "Newport Beach, CA".to_string(),
                difficulty: Difficulty::Medium,
                description: "Rocky coves with unique ecosystem. Bring gloves!".to_string(),
                image: "https://via.placeholder.com/400x300?text=Crystal+Cove".to_string(),
                coords: Coordinates {
                    lat: 33.5573,
                    lng: -117.8346,
                },
            },
            Beach {
                id: 3,
                name: "Ocean View Park".to_string(),
                location: "San Diego, CA".to_string(),
                difficulty: Difficulty::Easy,
                description: "Well-maintained beach perfect for large groups.".to_string(),
                image: "https://via.placeholder.com/400x300?text=Ocean+View+Park".to_string(),
                coords: Coordinates {
                    lat: 32.7157,
                    lng: -117.2279,
                },
            },
        ],
        events: vec![
            CleanupEvent {
                id: 1,
                name: "Summer Cleanup Splash".to_string(),
                beach_id: Some(1),
                beach_name: "Sunset Beach".to_string(),
                date: "2025-06-15".to_string(),
                time: "09:00".to_string(),
                attendees: 24,
                description: "Join us for a morning cleanup followed by a beach picnic!"
                    .to_string(),
            },
            CleanupEvent {
                id: 2,
                name: "Full Moon Beach Night".to_string(),
                beach_id: Some(2),
                beach_name: "Crystal Cove".to_string(),
                date: "2025-06-21".to_string(),
                time: "18:00".to_string(),
                attendees: 18,
                description: "Evening cleanup under the stars.".to_string(),
            },
        ],
        weather: WeatherSnapshot {
            temperature: 72,
            condition: "Sunny".to_string(),
            humidity: 65,
            wind_speed: 8,
            uv_index: 7,
        },
    }
}

fn crew_member(id: u64, name: &str, role: &str, avatar: &str) -> CrewMember {
    CrewMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let data = initial_state();
        assert_eq!(data.crew.len(), 3);
        assert_eq!(data.beaches.len(), 3);
        assert_eq!(data.events.len(), 2);
    }

    #[test]
    fn test_seed_events_reference_cataloged_beaches() {
        let data = initial_state();
        for event in &data.events {
            let beach_id = event.beach_id.expect("seed events link real beaches");
            let beach = data
                .beaches
                .iter()
                .find(|b| b.id == beach_id)
                .expect("referenced beach exists");
            assert_eq!(beach.name, event.beach_name);
        }
    }
}
