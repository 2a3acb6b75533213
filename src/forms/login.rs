// SPDX-License-Identifier: MPL-2.0
//! Sign-in form.

use super::{validate_required, FormError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Returns the trimmed username and the password as typed.
    pub fn credentials(&self) -> Result<(String, String), FormError> {
        validate_required(&[
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ])
        .into_result()?;
        Ok((self.username.trim().to_string(), self.password.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let form = LoginForm {
            username: "asha".into(),
            password: String::new(),
        };
        assert_eq!(
            form.credentials(),
            Err(FormError::MissingFields(vec!["password"]))
        );
    }

    #[test]
    fn username_is_trimmed_password_is_not() {
        let form = LoginForm {
            username: " asha ".into(),
            password: " pass ".into(),
        };
        assert_eq!(
            form.credentials().unwrap(),
            ("asha".to_string(), " pass ".to_string())
        );
    }
}
