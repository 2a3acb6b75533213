// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`transport`]: One HTTP round trip plus read access to the cookie store
//!
//! # Design Notes
//!
//! - Traits use crate types only (no `reqwest` types leak through)
//! - Traits are `Send + Sync` so the gateway can be shared across Iced tasks

pub mod transport;

pub use transport::{HttpRequest, HttpResponse, Method, Transport};
