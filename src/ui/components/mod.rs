// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! - [`error_display`] - Inline panel for content that failed to load
//! - [`field`] - Labeled text input with required-field highlighting

pub mod error_display;
pub mod field;

pub use error_display::{centered_error_view, ErrorDisplay};
pub use field::Field;
