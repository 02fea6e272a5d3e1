//! User-facing notification sink.
//!
//! Cart mutations surface confirmations ("Item added to cart", "Cart
//! cleared") to whatever UI hosts the cart. The manager never talks to a
//! toast system directly; it hands [`Notification`]s to a [`Notifier`].
//!
//! Ordering contract: the manager raises notifications only after the
//! in-memory mutation and its write-through persist have both completed.
//! A `Notifier` therefore always observes committed state.

/// A user-visible confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline, e.g. "Item added to cart".
    pub title: String,
    /// Detail line naming the affected item.
    pub body: String,
}

impl Notification {
    /// Create a notification from title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for cart confirmations.
pub trait Notifier {
    /// Deliver one notification. Must not fail; a sink that cannot deliver
    /// should drop the message.
    fn notify(&self, notification: Notification);
}

/// Notifier that logs confirmations through `tracing` at info level.
///
/// The default sink for headless consumers like the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(title = %notification.title, "{}", notification.body);
    }
}

/// Notifier that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Notification, Notifier};
    use std::sync::Mutex;

    /// Notifier that records every delivery for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        delivered: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn delivered(&self) -> Vec<Notification> {
            self.delivered.lock().expect("notifier lock").clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.delivered
                .lock()
                .expect("notifier lock")
                .push(notification);
        }
    }
}
