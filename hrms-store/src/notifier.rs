//! Outcome notification channel
//!
//! Wraps a `tokio::sync::broadcast` sender. UI collaborators subscribe and
//! drain [`Notification`]s; sending never blocks and never needs a runtime.

use shared::Notification;
use tokio::sync::broadcast;

#[derive(Clone, Debug)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// New receiver; sees notifications sent after this call
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn notify(&self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            severity = ?notification.severity,
            "{}",
            notification.message
        );
        // Err only means nobody is listening
        let _ = self.tx.send(notification);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivers_to_subscribers() {
        let notifier = Notifier::new(4);
        let mut rx = notifier.subscribe();

        notifier.notify(Notification::info("Company Added", "ABC has been successfully added."));

        let got = rx.try_recv().unwrap();
        assert_eq!(got.title, "Company Added");
        assert!(!got.is_destructive());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_no_subscribers_is_fine() {
        let notifier = Notifier::new(0);
        notifier.notify(Notification::destructive("Cannot Delete Shift", "in use"));
    }
}
