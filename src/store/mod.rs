//! In-memory state store.
//!
//! The store is the single source of truth for all application data. It is
//! seeded at startup and discarded on shutdown; nothing survives a restart.

mod seed;

pub use seed::initial_state;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{
    self, AppSnapshot, Beach, CleanupEvent, CreateCrewMemberRequest, CreateEventRequest,
    CrewMember, DialogState, RevisionInfo, UserProfile, WeatherSnapshot,
    DEFAULT_EVENT_DESCRIPTION, PLACEHOLDER_BEACH_LABEL,
};

/// Snapshot document schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// All application data, owned by the store.
#[derive(Debug, Clone)]
pub struct StoreData {
    pub user: UserProfile,
    pub crew: Vec<CrewMember>,
    pub beaches: Vec<Beach>,
    pub events: Vec<CleanupEvent>,
    pub weather: WeatherSnapshot,
}

struct Inner {
    data: StoreData,
    dialog: DialogState,
    revision_id: i64,
    generated_at: String,
}

impl Inner {
    /// Record that the data changed: bump the revision and refresh the stamp.
    fn touch(&mut self) {
        self.revision_id += 1;
        self.generated_at = Utc::now().to_rfc3339();
    }
}

/// State store shared across all handlers.
pub struct Store {
    inner: RwLock<Inner>,
}

impl Store {
    pub fn new(data: StoreData) -> Self {
        Self {
            inner: RwLock::new(Inner {
                data,
                dialog: DialogState::Closed,
                revision_id: 0,
                generated_at: Utc::now().to_rfc3339(),
            }),
        }
    }

    /// Store populated with the startup fixture data.
    pub fn seeded() -> Self {
        Self::new(initial_state())
    }

    // ==================== SNAPSHOT & REVISION ====================

    pub async fn revision_id(&self) -> i64 {
        self.inner.read().await.revision_id
    }

    pub async fn revision_info(&self) -> RevisionInfo {
        let inner = self.inner.read().await;
        RevisionInfo {
            revision_id: inner.revision_id,
            generated_at: inner.generated_at.clone(),
        }
    }

    /// The full application state as one document.
    pub async fn snapshot(&self) -> AppSnapshot {
        let inner = self.inner.read().await;
        AppSnapshot {
            schema_version: SCHEMA_VERSION,
            generated_at: inner.generated_at.clone(),
            revision_id: inner.revision_id,
            user: inner.data.user.clone(),
            crew: inner.data.crew.clone(),
            beaches: inner.data.beaches.clone(),
            events: inner.data.events.clone(),
            weather: inner.data.weather.clone(),
            dialog: inner.dialog,
        }
    }

    // ==================== BEACH CATALOG ====================

    pub async fn list_beaches(&self) -> Vec<Beach> {
        self.inner.read().await.data.beaches.clone()
    }

    pub async fn get_beach(&self, id: u64) -> Option<Beach> {
        let inner = self.inner.read().await;
        inner.data.beaches.iter().find(|b| b.id == id).cloned()
    }

    // ==================== CREW ROSTER ====================

    pub async fn list_crew(&self) -> Vec<CrewMember> {
        self.inner.read().await.data.crew.clone()
    }

    pub async fn get_crew_member(&self, id: u64) -> Option<CrewMember> {
        let inner = self.inner.read().await;
        inner.data.crew.iter().find(|m| m.id == id).cloned()
    }

    /// Add a crew member with the next free id.
    ///
    /// Names are not required to be unique. Ids increase monotonically from
    /// the current maximum, so they never repeat within a session.
    pub async fn add_crew_member(&self, request: &CreateCrewMemberRequest) -> CrewMember {
        let mut inner = self.inner.write().await;

        let avatar = match &request.avatar {
            Some(avatar) => avatar.clone(),
            None => models::initials(&request.name),
        };

        let member = CrewMember {
            id: next_id(inner.data.crew.iter().map(|m| m.id)),
            name: request.name.clone(),
            role: request.role.clone(),
            avatar,
        };

        inner.data.crew.push(member.clone());
        inner.touch();
        member
    }

    /// Remove a crew member, returning the removed entry.
    ///
    /// The member is looked up before anything is filtered, so an unknown id
    /// leaves the roster untouched. Remaining members keep their order.
    pub async fn remove_crew_member(&self, id: u64) -> Result<CrewMember, AppError> {
        let mut inner = self.inner.write().await;

        let index = inner
            .data
            .crew
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Crew member {} not found", id)))?;

        let member = inner.data.crew.remove(index);
        inner.touch();
        Ok(member)
    }

    // ==================== EVENTS ====================

    pub async fn list_events(&self) -> Vec<CleanupEvent> {
        self.inner.read().await.data.events.clone()
    }

    pub async fn get_event(&self, id: u64) -> Option<CleanupEvent> {
        let inner = self.inner.read().await;
        inner.data.events.iter().find(|e| e.id == id).cloned()
    }

    /// Register one more attendee on an event.
    ///
    /// Joining is one-way; there is no leave operation, so the count only
    /// ever grows. An unknown id leaves every event unchanged.
    pub async fn join_event(&self, id: u64) -> Result<CleanupEvent, AppError> {
        let mut inner = self.inner.write().await;

        let event = inner
            .data
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

        event.attendees += 1;
        let joined = event.clone();
        inner.touch();
        Ok(joined)
    }

    /// Create a new cleanup event from the submitted form fields.
    ///
    /// Name, date and time are stored verbatim (the form performs no
    /// validation); a blank description falls back to the default. A beach
    /// reference, when given, must name a cataloged beach; events without one
    /// are labeled with the submitter-location placeholder. Successful
    /// submission closes the creation dialog.
    pub async fn create_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<CleanupEvent, AppError> {
        let mut inner = self.inner.write().await;

        let beach_name = match request.beach_id {
            Some(beach_id) => inner
                .data
                .beaches
                .iter()
                .find(|b| b.id == beach_id)
                .map(|b| b.name.clone())
                .ok_or_else(|| {
                    AppError::Validation(format!("Beach {} is not in the catalog", beach_id))
                })?,
            None => PLACEHOLDER_BEACH_LABEL.to_string(),
        };

        let description = match request.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => DEFAULT_EVENT_DESCRIPTION.to_string(),
        };

        let event = CleanupEvent {
            id: next_id(inner.data.events.iter().map(|e| e.id)),
            name: request.name.clone(),
            beach_id: request.beach_id,
            beach_name,
            date: request.date.clone(),
            time: request.time.clone(),
            attendees: 1,
            description,
        };

        inner.data.events.push(event.clone());
        inner.dialog = DialogState::Closed;
        inner.touch();
        Ok(event)
    }

    // ==================== WEATHER ====================

    pub async fn weather(&self) -> WeatherSnapshot {
        self.inner.read().await.data.weather.clone()
    }

    /// Hook for a future live weather integration.
    ///
    /// No feed is wired up yet; the static snapshot is returned unchanged.
    pub async fn refresh_weather(&self) -> WeatherSnapshot {
        tracing::debug!("live weather feed not configured; serving static snapshot");
        self.weather().await
    }

    // ==================== DIALOG ====================

    pub async fn dialog(&self) -> DialogState {
        self.inner.read().await.dialog
    }

    pub async fn open_dialog(&self) -> DialogState {
        let mut inner = self.inner.write().await;
        inner.dialog = DialogState::Open;
        inner.touch();
        inner.dialog
    }

    pub async fn close_dialog(&self) -> DialogState {
        let mut inner = self.inner.write().await;
        inner.dialog = DialogState::Closed;
        inner.touch();
        inner.dialog
    }
}

/// Next free id: one past the current maximum, starting at 1.
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}
