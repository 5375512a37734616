use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

#[derive(Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

/// Transient one-line messages shown in the status bar. Only the latest
/// message is kept; it disappears after a few seconds.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.set(message.into(), NotificationKind::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.set(message.into(), NotificationKind::Error);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn prune_expired(&mut self) {
        if self.current.as_ref().is_some_and(|n| n.expires_at <= Instant::now()) {
            self.current = None;
        }
    }

    fn set(&mut self, message: String, kind: NotificationKind) {
        self.current = Some(Notification {
            message,
            kind,
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_message_wins() {
        let mut notifier = Notifier::new();
        notifier.info("first");
        notifier.error("second");
        let current = notifier.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn prune_keeps_unexpired_messages() {
        let mut notifier = Notifier::new();
        notifier.info("still fresh");
        notifier.prune_expired();
        assert!(notifier.current().is_some());
    }
}
