// SPDX-License-Identifier: MPL-2.0
//! Account registration form.

use super::password::{password_mismatch, PasswordStrength};
use super::{validate_required, FormError};
use crate::domain::NewAccount;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl RegisterForm {
    #[must_use]
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::evaluate(&self.password)
    }

    /// Live mismatch feedback for the confirmation field.
    #[must_use]
    pub fn mismatch(&self) -> Option<FormError> {
        password_mismatch(&self.password, &self.password2)
    }

    pub fn submit(&self) -> Result<NewAccount, FormError> {
        validate_required(&[
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("password2", self.password2.as_str()),
            ("phone_number", self.phone_number.as_str()),
        ])
        .into_result()?;

        if self.password != self.password2 {
            return Err(FormError::PasswordMismatch);
        }

        Ok(NewAccount {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password2: self.password2.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            username: "asha".into(),
            email: "asha@example.com".into(),
            password: "Tr4vel!now".into(),
            password2: "Tr4vel!now".into(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: "9800000000".into(),
        }
    }

    #[test]
    fn names_are_optional() {
        let account = filled().submit().unwrap();
        assert_eq!(account.username, "asha");
        assert!(account.first_name.is_empty());
    }

    #[test]
    fn required_fields_are_reported() {
        let form = RegisterForm {
            email: String::new(),
            phone_number: " ".into(),
            ..filled()
        };
        assert_eq!(
            form.submit(),
            Err(FormError::MissingFields(vec!["email", "phone_number"]))
        );
    }

    #[test]
    fn confirmation_must_match() {
        let form = RegisterForm {
            password2: "Tr4vel!nox".into(),
            ..filled()
        };
        assert_eq!(form.mismatch(), Some(FormError::PasswordMismatch));
        assert_eq!(form.submit(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn strength_tracks_password() {
        assert_eq!(filled().strength(), PasswordStrength::VeryStrong);
    }
}
