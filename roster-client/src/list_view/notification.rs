//! Transient status notifications
//!
//! A notification lives for [`NOTIFICATION_TTL`] after it is shown. Expiry is
//! evaluated lazily on read, so no timer task is needed.

use std::time::Duration;

use tokio::time::Instant;

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug)]
pub struct Notifier {
    current: Option<Notification>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.current = Some(Notification {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    /// Visible notification, dropping it once expired
    pub fn current(&mut self) -> Option<&Notification> {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.is_expired(self.ttl))
        {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
