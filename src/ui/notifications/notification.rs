// SPDX-License-Identifier: MPL-2.0
//! Notification data and lifecycle state.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Instant;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level, used for the accent color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Short glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Where a notification is in its lifecycle.
///
/// `Entering → Visible → (Paused ⇄ Visible) → Removing → Removed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Created, not yet shown for a frame.
    Entering,
    /// Shown, removal scheduled.
    Visible,
    /// Hovered, no removal scheduled.
    Paused,
    /// Playing the exit transition.
    Removing,
    /// Detached. Never observable from outside the manager.
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    state: State,
    created_at: Option<Instant>,
    /// Pending automatic removal. `None` while paused or removing.
    deadline: Option<Instant>,
    /// When the exit transition started.
    removing_since: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            state: State::Entering,
            created_at: None,
            deadline: None,
            removing_since: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// When automatic removal will start, if scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the toast is drawn at full opacity.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self.state, State::Visible | State::Paused)
    }

    pub(super) fn enter(&mut self, now: Instant, deadline: Instant) {
        self.state = State::Entering;
        self.created_at = Some(now);
        self.deadline = Some(deadline);
    }

    /// Entering becomes visible on the first tick strictly after creation.
    pub(super) fn reveal_if_due(&mut self, now: Instant) -> bool {
        let due = self.state == State::Entering && self.created_at.is_some_and(|at| now > at);
        if due {
            self.state = State::Visible;
        }
        due
    }

    pub(super) fn removal_due(&self, now: Instant) -> bool {
        matches!(self.state, State::Entering | State::Visible)
            && self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub(super) fn pause(&mut self) -> bool {
        if matches!(self.state, State::Entering | State::Visible) {
            self.state = State::Paused;
            self.deadline = None;
            true
        } else {
            false
        }
    }

    pub(super) fn resume(&mut self, deadline: Instant) -> bool {
        if self.state == State::Paused {
            self.state = State::Visible;
            self.deadline = Some(deadline);
            true
        } else {
            false
        }
    }

    /// Starts the exit transition. No-op once removal has begun.
    pub(super) fn begin_removal(&mut self, now: Instant) -> bool {
        if matches!(self.state, State::Removing | State::Removed) {
            return false;
        }
        self.state = State::Removing;
        self.deadline = None;
        self.removing_since = Some(now);
        true
    }

    pub(super) fn finish_removal_if_due(&mut self, now: Instant, exit: std::time::Duration) -> bool {
        let due = self.state == State::Removing
            && self
                .removing_since
                .is_some_and(|since| now >= since + exit);
        if due {
            self.state = State::Removed;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn constructors_set_severity_and_start_entering() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        let error = Notification::error("Failed to copy URL");
        assert_eq!(error.severity(), Severity::Error);
        assert_eq!(error.state(), State::Entering);
        assert_eq!(error.message(), "Failed to copy URL");
    }

    #[test]
    fn removal_cannot_begin_twice() {
        let now = Instant::now();
        let mut notification = Notification::info("x");
        notification.enter(now, now + Duration::from_secs(5));
        assert!(notification.begin_removal(now));
        assert!(!notification.begin_removal(now + Duration::from_millis(10)));
        assert!(!notification.pause());
    }
}
