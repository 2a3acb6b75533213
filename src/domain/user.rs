// SPDX-License-Identifier: MPL-2.0
//! The signed-in account.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Full name when set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Body of a successful `POST /api/login/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

/// Body of plain acknowledgements such as logout and cancel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// Payload for `POST /api/register/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_login_response() {
        let response: LoginResponse = serde_json::from_value(json!({
            "message": "Login successful",
            "user": {"id": 4, "username": "asha", "email": "asha@example.com",
                     "first_name": "Asha", "last_name": "Rao"}
        }))
        .unwrap();
        assert_eq!(response.user.display_name(), "Asha Rao");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user: User = serde_json::from_value(json!({"id": 1, "username": "ravi"})).unwrap();
        assert_eq!(user.display_name(), "ravi");
    }
}
