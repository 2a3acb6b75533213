// SPDX-License-Identifier: MPL-2.0
//! Client-side form validation.
//!
//! Validation runs before any request is sent; a [`FormError`] is reported
//! to the user as a toast and nothing goes on the wire.

pub mod booking;
pub mod login;
pub mod password;
pub mod register;

pub use booking::BookingForm;
pub use login::LoginForm;
pub use password::{password_mismatch, PasswordStrength};
pub use register::RegisterForm;

/// User input that cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid number of seats")]
    InvalidSeatCount,
    #[error("Please provide all passenger details")]
    IncompletePassengers,
    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Outcome of [`validate_required`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    /// Names of the required fields left blank, in input order.
    pub invalid: Vec<&'static str>,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    #[must_use]
    pub fn is_invalid(&self, field: &str) -> bool {
        self.invalid.iter().any(|name| *name == field)
    }

    /// Converts into a `Result`, keeping the invalid field names.
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FormError::MissingFields(self.invalid))
        }
    }
}

/// Marks every required field whose trimmed value is empty.
#[must_use]
pub fn validate_required(fields: &[(&'static str, &str)]) -> Validation {
    Validation {
        invalid: fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect(),
    }
}
