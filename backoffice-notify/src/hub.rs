//! Notification hub
//!
//! Cheap-clone handle over a broadcast channel. Publishing never fails and
//! never blocks: with no subscribers the notification is dropped, and a
//! subscriber that falls behind loses the oldest entries first. Toasts are
//! transient, so both are acceptable.

use tokio::sync::broadcast;

use crate::notification::Notification;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct NotificationHub {
    tx: broadcast::Sender<Notification>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new listener. Each receiver sees every notification
    /// published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn notify(&self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "notification");
        let _ = self.tx.send(notification);
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;

    #[tokio::test]
    async fn test_notify_reaches_every_subscriber() {
        let hub = NotificationHub::new();
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.notify(Notification::server_error());

        assert_eq!(first.recv().await.unwrap().kind, NotificationKind::ServerError);
        assert_eq!(second.recv().await.unwrap().kind, NotificationKind::ServerError);
    }

    #[tokio::test]
    async fn test_notify_without_subscribers_is_a_noop() {
        let hub = NotificationHub::new();
        hub.notify(Notification::info("nobody is listening"));
        assert_eq!(hub.receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_the_channel() {
        let hub = NotificationHub::new();
        let clone = hub.clone();
        let mut rx = hub.subscribe();

        clone.notify(Notification::success("saved"));

        assert_eq!(rx.recv().await.unwrap().message, "saved");
    }

    #[tokio::test]
    async fn test_subscription_only_sees_later_notifications() {
        let hub = NotificationHub::new();
        hub.notify(Notification::info("before"));

        let mut rx = hub.subscribe();
        hub.notify(Notification::info("after"));

        assert_eq!(rx.recv().await.unwrap().message, "after");
        assert!(rx.try_recv().is_err());
    }
}
