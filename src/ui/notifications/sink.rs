// SPDX-License-Identifier: MPL-2.0
//! Presentation hooks for the notification lifecycle.
//!
//! The [`Manager`](super::Manager) reports every lifecycle step to a sink.
//! The Iced overlay renders straight from the manager, so the default
//! [`LogSink`] only traces; other front ends can mirror toasts elsewhere.

use super::notification::{Notification, NotificationId};

pub trait NotificationSink {
    /// Makes sure a container exists. `false` means notifications cannot be
    /// shown and the push is dropped.
    fn attach(&mut self) -> bool;

    /// A notification was created.
    fn create(&mut self, notification: &Notification);

    /// A notification changed state.
    fn update(&mut self, notification: &Notification);

    /// A notification finished its exit transition and is gone.
    fn destroy(&mut self, id: NotificationId);
}

/// Traces the lifecycle through `log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn attach(&mut self) -> bool {
        true
    }

    fn create(&mut self, notification: &Notification) {
        log::debug!(
            "toast {} [{}]: {}",
            notification.id(),
            notification.severity().as_str(),
            notification.message()
        );
    }

    fn update(&mut self, notification: &Notification) {
        log::trace!("toast {} -> {:?}", notification.id(), notification.state());
    }

    fn destroy(&mut self, id: NotificationId) {
        log::trace!("toast {id} removed");
    }
}
