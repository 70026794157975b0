//! Notification center.
//!
//! Holds the transient toast messages pushed by mutating operations. Each
//! notification owns a sleeper task that dismisses it after the configured
//! TTL; dismissing early aborts the task, so a timer never fires against a
//! notification that is already gone.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::models::Notification;

struct ActiveNotification {
    notification: Notification,
    timer: AbortHandle,
}

#[derive(Default)]
struct Inner {
    entries: RwLock<Vec<ActiveNotification>>,
}

impl Inner {
    /// Remove and return the entry for `id`, if present.
    async fn take(&self, id: Uuid) -> Option<ActiveNotification> {
        let mut entries = self.entries.write().await;
        let index = entries.iter().position(|e| e.notification.id == id)?;
        Some(entries.remove(index))
    }
}

/// Shared notification center. Cheap to clone.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner::default()),
            ttl,
        }
    }

    /// Push a notification and schedule its auto-dismissal.
    pub async fn push(&self, message: impl Into<String>) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            created_at: Utc::now().to_rfc3339(),
        };

        let inner = Arc::clone(&self.inner);
        let id = notification.id;
        let ttl = self.ttl;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if inner.take(id).await.is_some() {
                tracing::debug!(%id, "notification expired");
            }
        })
        .abort_handle();

        self.inner.entries.write().await.push(ActiveNotification {
            notification: notification.clone(),
            timer,
        });

        tracing::debug!(id = %notification.id, message = %notification.message, "notification pushed");
        notification
    }

    /// Currently visible notifications, oldest first.
    pub async fn list(&self) -> Vec<Notification> {
        let entries = self.inner.entries.read().await;
        entries.iter().map(|e| e.notification.clone()).collect()
    }

    /// Dismiss a notification ahead of its timer. Returns false for unknown ids.
    pub async fn dismiss(&self, id: Uuid) -> bool {
        match self.inner.take(id).await {
            Some(entry) => {
                entry.timer.abort();
                true
            }
            None => false,
        }
    }
}
