// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Acknowledgement, Booking, LoginResponse, TravelOption};
use crate::error::Error;
use crate::ui::{account, booking_details, booking_form, bookings, navbar, notifications, search};
use serde_json::Value;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Search(search::Message),
    BookingForm(booking_form::Message),
    Bookings(bookings::Message),
    BookingDetails(booking_details::Message),
    Account(account::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast timers.
    Tick(Instant),
    /// Once-per-second tick for the departure countdown.
    CountdownTick,
    /// Vertical offset of the page scrollable changed.
    Scrolled(f32),
    ScrollToTop,
    SearchCompleted(Result<Vec<TravelOption>, Error>),
    BookingCreated(Result<Value, Error>),
    BookingsLoaded(Result<Vec<Booking>, Error>),
    BookingLoaded {
        id: u64,
        result: Result<Booking, Error>,
    },
    BookingCancelled {
        id: u64,
        result: Result<Acknowledgement, Error>,
    },
    LoggedIn(Result<LoginResponse, Error>),
    LoggedOut(Result<Acknowledgement, Error>),
    Registered(Result<Value, Error>),
    /// Clipboard contents read back after copying a share link.
    ShareCopied {
        url: String,
        clipboard: Option<String>,
    },
    /// A delayed follow-up navigation came due.
    Redirect(Redirect),
}

/// Navigation scheduled after a success toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Bookings,
    ReloadBooking(u64),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Backend base URL, overriding `[api] base_url`.
    pub base_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TRAVEL_DESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Booking to open on startup, as typed. An id that is not a number
    /// opens the details screen with the missing-id error.
    pub booking_id: Option<String>,
}
