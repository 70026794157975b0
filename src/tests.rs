//! Integration tests for the ShoreSquad backend.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::notify::NotificationCenter;
use crate::store::Store;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_options(Some("test-api-key".to_string()), 60_000).await
    }

    async fn with_options(psk: Option<String>, notification_ttl_ms: u64) -> Self {
        let config = Config {
            api_psk: psk.clone(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            notification_ttl_ms,
            weather_api_url: None,
        };

        let state = AppState {
            store: Arc::new(Store::seeded()),
            notifications: NotificationCenter::new(Duration::from_millis(notification_ttl_ms)),
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut client_builder = Client::builder();
        if let Some(key) = psk {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-api-key", key.parse().unwrap());
            client_builder = client_builder.default_headers(headers);
        }

        TestFixture {
            client: client_builder.build().unwrap(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Value {
        self.client
            .get(self.url(path))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_psk() {
    let fixture = TestFixture::with_options(Some("secret-key".to_string()), 60_000).await;

    // Request without API key
    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/snapshot"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_auth_invalid_psk() {
    let fixture = TestFixture::with_options(Some("correct-key".to_string()), 60_000).await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/snapshot"))
        .header("x-api-key", "wrong-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_auth_bearer_token() {
    let fixture = TestFixture::with_options(Some("correct-key".to_string()), 60_000).await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/snapshot"))
        .header("authorization", "Bearer correct-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_auth_disabled_without_psk() {
    let fixture = TestFixture::with_options(None, 60_000).await;

    let resp = fixture
        .client
        .get(fixture.url("/api/snapshot"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_snapshot_seed_state() {
    let fixture = TestFixture::new().await;

    let body = fixture.get_json("/api/snapshot").await;
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["schemaVersion"], 1);
    assert_eq!(data["revisionId"], 0);
    assert_eq!(data["crew"].as_array().unwrap().len(), 3);
    assert_eq!(data["beaches"].as_array().unwrap().len(), 3);
    assert_eq!(data["events"].as_array().unwrap().len(), 2);
    assert_eq!(data["dialog"], "closed");
    assert_eq!(data["user"]["role"], "Organizer");
    assert_eq!(data["weather"]["temperature"], 72);
}

#[tokio::test]
async fn test_snapshot_revision() {
    let fixture = TestFixture::new().await;

    let body = fixture.get_json("/api/snapshot/revision").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["revisionId"], 0);
    assert!(body["data"]["generatedAt"].is_string());
}

#[tokio::test]
async fn test_crew_add_ids_strictly_increase() {
    let fixture = TestFixture::new().await;

    let mut last_id = 3; // seed roster holds ids 1..=3
    for name in ["Robin Reyes", "Casey Kim", "Robin Reyes"] {
        let resp = fixture
            .client
            .post(fixture.url("/api/crew"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        let id = body["data"]["id"].as_u64().unwrap();
        assert!(id > last_id);
        last_id = id;
    }

    let crew = fixture.get_json("/api/crew").await;
    assert_eq!(crew["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_crew_add_defaults() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/crew"))
        .json(&json!({ "name": "Robin Reyes" }))
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["role"], "Volunteer");
    assert_eq!(body["data"]["avatar"], "RR");

    // explicit avatar and role win over the defaults
    let resp = fixture
        .client
        .post(fixture.url("/api/crew"))
        .json(&json!({ "name": "Casey Kim", "role": "Co-organizer", "avatar": "CK!" }))
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["role"], "Co-organizer");
    assert_eq!(body["data"]["avatar"], "CK!");
}

#[tokio::test]
async fn test_crew_remove() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/crew/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let crew = fixture.get_json("/api/crew").await;
    let names: Vec<&str> = crew["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alex Johnson", "Sam Taylor"]);
}

#[tokio::test]
async fn test_crew_remove_unknown_id_leaves_roster_alone() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/crew/99"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let crew = fixture.get_json("/api/crew").await;
    assert_eq!(crew["data"].as_array().unwrap().len(), 3);
    assert_eq!(crew["revisionId"], 0);
}

#[tokio::test]
async fn test_crew_message_is_notification_only() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/crew/1/message"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Opening chat with Alex Johnson...");

    // messaging mutates nothing
    assert_eq!(body["revisionId"], 0);

    let resp = fixture
        .client
        .post(fixture.url("/api/crew/99/message"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_event_join_accumulates() {
    let fixture = TestFixture::new().await;

    // seed event 1 starts at 24 attendees
    for expected in [25, 26, 27] {
        let resp = fixture
            .client
            .post(fixture.url("/api/events/1/join"))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["attendees"], expected);
    }

    // the other seed event is untouched
    let other = fixture.get_json("/api/events/2").await;
    assert_eq!(other["data"]["attendees"], 18);
}

#[tokio::test]
async fn test_event_join_unknown_id() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/events/99/join"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let events = fixture.get_json("/api/events").await;
    assert_eq!(events["data"][0]["attendees"], 24);
    assert_eq!(events["data"][1]["attendees"], 18);
}

#[tokio::test]
async fn test_event_create_defaults() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({
            "name": "Beach Day",
            "date": "2025-07-04",
            "time": "10:00",
            "description": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let data = &body["data"];
    assert_eq!(data["id"], 3); // seed events hold ids 1..=2
    assert_eq!(data["attendees"], 1);
    assert_eq!(data["beachName"], "User Location");
    assert_eq!(data["description"], "Community beach cleanup");
    assert!(data.get("beachId").is_none());
}

#[tokio::test]
async fn test_event_create_blank_fields_accepted() {
    let fixture = TestFixture::new().await;

    // the form performs no validation; empty strings are stored verbatim
    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({ "name": "", "date": "", "time": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "");
    assert_eq!(body["data"]["date"], "");
    assert_eq!(body["data"]["description"], "Community beach cleanup");
}

#[tokio::test]
async fn test_event_create_with_beach_reference() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({
            "name": "Cove Sweep",
            "date": "2025-08-01",
            "time": "08:30",
            "beachId": 2
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["beachId"], 2);
    assert_eq!(body["data"]["beachName"], "Crystal Cove");
}

#[tokio::test]
async fn test_event_create_rejects_unknown_beach() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({
            "name": "Nowhere",
            "date": "2025-08-01",
            "time": "08:30",
            "beachId": 42
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let events = fixture.get_json("/api/events").await;
    assert_eq!(events["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_dialog_open_close_leaves_events_alone() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/dialog/open"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], "open");

    let resp = fixture
        .client
        .post(fixture.url("/api/dialog/close"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], "closed");

    let events = fixture.get_json("/api/events").await;
    assert_eq!(events["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_event_submission_closes_dialog() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .post(fixture.url("/api/dialog/open"))
        .send()
        .await
        .unwrap();

    fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({ "name": "Dawn Patrol", "date": "2025-09-01", "time": "06:00" }))
        .send()
        .await
        .unwrap();

    let dialog = fixture.get_json("/api/dialog").await;
    assert_eq!(dialog["data"], "closed");
}

#[tokio::test]
async fn test_weather_snapshot() {
    let fixture = TestFixture::new().await;

    let body = fixture.get_json("/api/weather").await;
    let data = &body["data"];
    assert_eq!(data["temperature"], 72);
    assert_eq!(data["condition"], "Sunny");
    assert_eq!(data["humidity"], 65);
    assert_eq!(data["windSpeed"], 8);
    assert_eq!(data["uvIndex"], 7);
}

#[tokio::test]
async fn test_weather_refresh_is_a_noop() {
    let fixture = TestFixture::new().await;

    let before = fixture.get_json("/api/weather").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/weather/refresh"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let after: Value = resp.json().await.unwrap();

    assert_eq!(before["data"], after["data"]);
    assert_eq!(after["revisionId"], 0);
}

#[tokio::test]
async fn test_beach_select_is_read_only() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/beaches/1/select"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["beach"]["name"], "Sunset Beach");
    assert_eq!(body["data"]["scrollTo"], "events");
    assert_eq!(body["revisionId"], 0);

    let notifications = fixture.get_json("/api/notifications").await;
    assert_eq!(
        notifications["data"][0]["message"],
        "Sunset Beach selected! Ready to plan a cleanup?"
    );

    let resp = fixture
        .client
        .post(fixture.url("/api/beaches/99/select"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_fragments_seed_counts() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/fragments/crew"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let crew_html = resp.text().await.unwrap();
    assert_eq!(crew_html.matches("class=\"crew-member\"").count(), 3);

    let beaches_html = fixture
        .client
        .get(fixture.url("/api/fragments/beaches"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(beaches_html.matches("beach-card\"").count(), 3);

    let events_html = fixture
        .client
        .get(fixture.url("/api/fragments/events"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(events_html.matches("event-card\"").count(), 2);
    assert!(events_html.contains("Sun, Jun 15 at 09:00 AM"));

    let weather_html = fixture
        .client
        .get(fixture.url("/api/fragments/weather"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(weather_html.matches("class=\"weather-card\"").count(), 4);
}

#[tokio::test]
async fn test_fragments_are_idempotent() {
    let fixture = TestFixture::new().await;

    for path in [
        "/api/fragments/beaches",
        "/api/fragments/crew",
        "/api/fragments/events",
        "/api/fragments/weather",
        "/api/fragments/dialog",
    ] {
        let first = fixture
            .client
            .get(fixture.url(path))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let second = fixture
            .client
            .get(fixture.url(path))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(first, second, "{} not idempotent", path);
    }
}

#[tokio::test]
async fn test_fragments_track_mutations() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .post(fixture.url("/api/crew"))
        .json(&json!({ "name": "Robin Reyes" }))
        .send()
        .await
        .unwrap();

    let crew_html = fixture
        .client
        .get(fixture.url("/api/fragments/crew"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(crew_html.matches("class=\"crew-member\"").count(), 4);
    assert!(crew_html.contains("Robin Reyes"));

    let dialog_html = fixture
        .client
        .get(fixture.url("/api/fragments/dialog"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(dialog_html.contains("aria-hidden=\"true\""));

    fixture
        .client
        .post(fixture.url("/api/dialog/open"))
        .send()
        .await
        .unwrap();

    let dialog_html = fixture
        .client
        .get(fixture.url("/api/fragments/dialog"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(dialog_html.contains("aria-hidden=\"false\""));
}

#[tokio::test]
async fn test_notification_lifecycle() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .post(fixture.url("/api/crew"))
        .json(&json!({ "name": "Robin Reyes" }))
        .send()
        .await
        .unwrap();

    let list = fixture.get_json("/api/notifications").await;
    let notifications = list["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["message"], "Robin Reyes added to your crew!");
    let id = notifications[0]["id"].as_str().unwrap().to_string();

    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/notifications/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let list = fixture.get_json("/api/notifications").await;
    assert!(list["data"].as_array().unwrap().is_empty());

    // dismissing again reports not-found
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/notifications/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_notifications_auto_dismiss() {
    let fixture = TestFixture::with_options(Some("test-api-key".to_string()), 50).await;

    fixture
        .client
        .post(fixture.url("/api/events/1/join"))
        .send()
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(250)).await;

    let list = fixture.get_json("/api/notifications").await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_revision_increments_per_mutation() {
    let fixture = TestFixture::new().await;

    let mut expected = 0;
    let body = fixture.get_json("/api/snapshot/revision").await;
    assert_eq!(body["data"]["revisionId"], expected);

    for (method, path, payload) in [
        ("post", "/api/crew", Some(json!({ "name": "Robin Reyes" }))),
        ("post", "/api/events/1/join", None),
        ("delete", "/api/crew/1", None),
        ("post", "/api/dialog/open", None),
    ] {
        let request = match method {
            "post" => fixture.client.post(fixture.url(path)),
            _ => fixture.client.delete(fixture.url(path)),
        };
        let request = match payload {
            Some(body) => request.json(&body),
            None => request,
        };
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), 200);

        expected += 1;
        let body = fixture.get_json("/api/snapshot/revision").await;
        assert_eq!(body["data"]["revisionId"], expected, "after {}", path);
    }

    // reads and selection leave the revision alone
    fixture.get_json("/api/snapshot").await;
    fixture
        .client
        .post(fixture.url("/api/beaches/1/select"))
        .send()
        .await
        .unwrap();
    let body = fixture.get_json("/api/snapshot/revision").await;
    assert_eq!(body["data"]["revisionId"], expected);
}
