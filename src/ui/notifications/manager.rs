// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every live toast and drives its timers. Time is always
//! passed in, so the whole lifecycle can be stepped deterministically.

use super::notification::{Notification, NotificationId, Severity, State};
use super::sink::{LogSink, NotificationSink};
use crate::config::defaults::{DEFAULT_TOAST_DURATION_MS, DEFAULT_TOAST_EXIT_MS};
use std::fmt;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Pointer entered the toast.
    HoverEnter(NotificationId),
    /// Pointer left the toast.
    HoverLeave(NotificationId),
    /// Periodic tick driving timers.
    Tick(Instant),
}

/// Manages live notifications. Every toast has its own timers.
pub struct Manager {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
    sink: Box<dyn NotificationSink>,
    /// Delay before an unattended toast starts its exit.
    duration: Duration,
    /// Length of the exit transition.
    exit_transition: Duration,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("notifications", &self.notifications)
            .field("duration", &self.duration)
            .field("exit_transition", &self.exit_transition)
            .finish_non_exhaustive()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            sink: Box::new(LogSink),
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            exit_transition: Duration::from_millis(DEFAULT_TOAST_EXIT_MS),
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timing(mut self, duration: Duration, exit_transition: Duration) -> Self {
        self.duration = duration;
        self.exit_transition = exit_transition;
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Shows `message` as a new toast.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.push(Notification::new(severity, message), now);
    }

    /// Shows a prepared notification. Removal is scheduled `duration`
    /// after `now`. Dropped silently if the sink has no container.
    pub fn push(&mut self, mut notification: Notification, now: Instant) {
        if !self.sink.attach() {
            log::debug!("no notification container; dropping toast");
            return;
        }
        notification.enter(now, now + self.duration);
        self.sink.create(&notification);
        self.notifications.push(notification);
    }

    /// Pauses automatic removal while the pointer is over the toast.
    pub fn hover_enter(&mut self, id: NotificationId) {
        if let Some(notification) = self.find_mut(id) {
            if notification.pause() {
                self.notify_update(id);
            }
        }
    }

    /// Resumes with a fresh full delay, not the time that was left.
    pub fn hover_leave(&mut self, id: NotificationId, now: Instant) {
        let deadline = now + self.duration;
        if let Some(notification) = self.find_mut(id) {
            if notification.resume(deadline) {
                self.notify_update(id);
            }
        }
    }

    /// Starts removal immediately, cancelling any pending deadline.
    ///
    /// Returns `true` if the notification was live and not already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        let started = self
            .find_mut(id)
            .is_some_and(|notification| notification.begin_removal(now));
        if started {
            self.notify_update(id);
        }
        started
    }

    /// Advances every timer to `now`.
    pub fn tick(&mut self, now: Instant) {
        let exit = self.exit_transition;

        for notification in &mut self.notifications {
            let mut changed = notification.reveal_if_due(now);
            if notification.removal_due(now) {
                changed |= notification.begin_removal(now);
            }
            if changed {
                self.sink.update(notification);
            }
            if notification.finish_removal_if_due(now, exit) {
                self.sink.destroy(notification.id());
            }
        }

        self.notifications
            .retain(|notification| notification.state() != State::Removed);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::HoverEnter(id) => self.hover_enter(*id),
            Message::HoverLeave(id) => self.hover_leave(*id, now),
            Message::Tick(instant) => self.tick(*instant),
        }
    }

    /// Returns the live notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.notifications.len()
    }

    /// Whether any timer still needs ticking.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id() == id)
    }

    fn notify_update(&mut self, id: NotificationId) {
        if let Some(notification) = self.notifications.iter().find(|n| n.id() == id) {
            self.sink.update(notification);
        }
    }
}
