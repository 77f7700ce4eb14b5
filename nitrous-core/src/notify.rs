//! User-visible notifications
//!
//! Session actions report outcomes through a [`NotificationSink`] instead of a
//! global toast service, so the core stays testable without a UI.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    Success,
    Failure,
}

/// A toast-style message for the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub style: NotificationStyle,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Failure,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.style == NotificationStyle::Failure
    }
}

/// Receives notifications emitted by session actions
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that only logs
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.style {
            NotificationStyle::Success => tracing::info!(
                title = notification.title.as_str(),
                "{}",
                notification.message
            ),
            NotificationStyle::Failure => tracing::warn!(
                title = notification.title.as_str(),
                "{}",
                notification.message
            ),
        }
    }
}

/// Sink that keeps every notification in memory
///
/// Useful for hosts that render notifications in batches, and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_entries(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Notification buffer lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Copy of everything received so far
    pub fn entries(&self) -> Vec<Notification> {
        self.lock_entries().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.lock_entries().last().cloned()
    }

    /// Remove and return everything received so far
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock_entries())
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.lock_entries().push(notification);
    }
}
