// Collects notifications in a list until a UI polls them.

use crate::shared::infrastructure::notifier::{Notification, Notifier};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
pub struct InMemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.guard().clone()
    }

    /// Returns the pending notifications, oldest first, and clears the list.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.guard())
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.guard().push(notification);
    }
}
