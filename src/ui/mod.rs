// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`search`] - Travel search form and result cards
//! - [`booking_form`] - Seat count and passenger details for a new booking
//! - [`bookings`] - The user's bookings
//! - [`booking_details`] - One booking with countdown, cancel and share
//! - [`account`] - Sign in and registration
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display, labeled field)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback
//! - [`scroll_to_top`] - Floating button for long pages

pub mod account;
pub mod booking_details;
pub mod booking_form;
pub mod bookings;
pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod scroll_to_top;
pub mod search;
pub mod styles;
pub mod theming;
