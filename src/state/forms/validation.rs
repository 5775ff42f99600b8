//! Validation rules for the registration form

use super::field::FieldName;
use thiserror::Error;

/// Reasons a submission is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please fill in all fields")]
    MissingField,
}

/// Whether the password pair should be flagged as mismatched.
///
/// The confirmation is "in play" once it has content or was the last
/// password field edited, so clearing it while typing still shows the error.
pub fn compute_mismatch(password: &str, confirm: &str, active_field: Option<FieldName>) -> bool {
    let in_play = !confirm.is_empty() || active_field == Some(FieldName::ConfirmPassword);
    in_play && password != confirm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_passwords_match() {
        assert!(!compute_mismatch("secret", "secret", Some(FieldName::ConfirmPassword)));
        assert!(!compute_mismatch("secret", "secret", Some(FieldName::Password)));
    }

    #[test]
    fn test_different_passwords_mismatch() {
        assert!(compute_mismatch("secret", "secreT", Some(FieldName::ConfirmPassword)));
        assert!(compute_mismatch("secret", "other", Some(FieldName::Password)));
    }

    #[test]
    fn test_empty_confirm_not_in_play() {
        assert!(!compute_mismatch("secret", "", None));
        assert!(!compute_mismatch("secret", "", Some(FieldName::Password)));
    }

    #[test]
    fn test_empty_confirm_while_editing_it() {
        assert!(compute_mismatch("secret", "", Some(FieldName::ConfirmPassword)));
        assert!(!compute_mismatch("", "", Some(FieldName::ConfirmPassword)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please fill in all fields"
        );
    }
}
