// SPDX-License-Identifier: MPL-2.0
//! Password strength meter and confirmation check.

use super::FormError;

/// Strength rating shown under a password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Rates a password: one point each for length of at least 8, a
    /// lowercase letter, an uppercase letter, a digit and any other character.
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        let checks = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        match checks.iter().filter(|passed| **passed).count() {
            0 | 1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Medium,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Style class: weak, medium or strong.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::VeryWeak | Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong | Self::VeryStrong => "strong",
        }
    }
}

/// Mismatch error, only once the confirmation has been typed.
#[must_use]
pub fn password_mismatch(password: &str, confirmation: &str) -> Option<FormError> {
    (!confirmation.is_empty() && password != confirmation).then_some(FormError::PasswordMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_follow_point_count() {
        assert_eq!(PasswordStrength::evaluate(""), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::evaluate("abc"), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::evaluate("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::evaluate("abcdefG1"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::evaluate("Abc1"), PasswordStrength::Medium);
        assert_eq!(
            PasswordStrength::evaluate("Abcdef1!"),
            PasswordStrength::VeryStrong
        );
    }

    #[test]
    fn labels_and_classes() {
        assert_eq!(PasswordStrength::VeryWeak.label(), "Very Weak");
        assert_eq!(PasswordStrength::VeryWeak.class(), "weak");
        assert_eq!(PasswordStrength::Medium.class(), "medium");
        assert_eq!(PasswordStrength::VeryStrong.class(), "strong");
    }

    #[test]
    fn mismatch_only_reported_for_non_empty_confirmation() {
        assert_eq!(password_mismatch("secret", ""), None);
        assert_eq!(password_mismatch("secret", "secret"), None);
        assert_eq!(
            password_mismatch("secret", "secreT"),
            Some(FormError::PasswordMismatch)
        );
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
