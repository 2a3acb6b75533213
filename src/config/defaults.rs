// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Api**: Backend location and CSRF cookie
//! - **Notifications**: Toast display and exit timings
//! - **Navigation**: Delayed redirects and scroll thresholds

// ==========================================================================
// Api Defaults
// ==========================================================================

/// Backend the client talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Cookie holding the anti-forgery token set by the backend.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Header the backend reads the anti-forgery token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays on screen before it starts leaving (milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Minimum toast duration (milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Maximum toast duration (milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Length of the exit transition before a toast is detached (milliseconds).
pub const DEFAULT_TOAST_EXIT_MS: u64 = 400;

/// Interval of the tick that drives toast timers (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Delay between a successful booking action and the follow-up navigation.
pub const REDIRECT_DELAY_MS: u64 = 2000;

/// Scroll offset after which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_OFFSET: f32 = 50.0;

/// Scroll offset after which the scroll-to-top button appears.
pub const SCROLL_TO_TOP_OFFSET: f32 = 300.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS <= DEFAULT_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_EXIT_MS < MIN_TOAST_DURATION_MS);
    assert!(NAVBAR_SCROLLED_OFFSET < SCROLL_TO_TOP_OFFSET);
};
