// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: HTTP transport via `reqwest` (implements [`Transport`])
//!
//! [`Transport`]: crate::application::port::Transport

pub mod http;

pub use http::ReqwestTransport;
