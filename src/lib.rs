// SPDX-License-Identifier: MPL-2.0
//! `travel_desk` is a desktop client for a travel booking REST backend, built
//! with the Iced GUI framework.
//!
//! It searches travel options, creates and cancels bookings and shows their
//! details. Every backend call goes through one [`gateway::Gateway`] that
//! attaches the CSRF token and turns error bodies into a single readable
//! message; results are reported as toasts from [`ui::notifications`].

#![doc(html_root_url = "https://docs.rs/travel_desk/0.1.0")]

pub mod api;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod forms;
pub mod gateway;
pub mod infrastructure;
pub mod ui;
