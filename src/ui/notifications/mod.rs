// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to report the
//! result of an action without blocking interaction. Each toast removes
//! itself after a configurable delay, pauses while hovered and can be
//! dismissed by hand.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and the lifecycle `State`
//! - [`manager`] - `Manager` owning the toasts and their timers
//! - [`sink`] - `NotificationSink` hooks for each lifecycle step
//! - [`toast`] - Toast widget rendering the manager's toasts
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//! manager.notify("Booking cancelled successfully!", Severity::Success, Instant::now());
//!
//! // Drive timers from a subscription, render in the view.
//! manager.tick(Instant::now());
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod sink;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, State};
pub use sink::{LogSink, NotificationSink};
pub use toast::Toast;
