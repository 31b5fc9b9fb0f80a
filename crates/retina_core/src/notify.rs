//! Transient status toast with a single owned hide deadline.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

pub const MSG_NO_FILE: &str = "No file uploaded. Please upload a file.";
pub const MSG_FAILED: &str = "Something went wrong. Please try again.";
pub const MSG_UNSUPPORTED: &str = "Unsupported file. Please upload an image.";

pub fn severity_message(label: &str) -> String {
    format!("Severity: {label}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn hides_at(&self) -> Instant {
        self.shown_at + NOTIFICATION_TTL
    }
}

/// Holds at most one notification. A new `notify` replaces the pending one and
/// restarts the deadline, so an older timer can never hide a newer message.
#[derive(Debug, Default)]
pub struct Notifier {
    slot: Option<Notification>,
}

impl Notifier {
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(?kind, %message, "notification shown");
        self.slot = Some(Notification {
            kind,
            message,
            shown_at: now,
        });
    }

    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.slot.as_ref().filter(|n| now < n.hides_at())
    }

    /// Drops an expired notification. Returns true when something was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.slot {
            Some(n) if now >= n.hides_at() => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the visible notification hides, for repaint scheduling.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current(now).map(|n| n.hides_at() - now)
    }
}
