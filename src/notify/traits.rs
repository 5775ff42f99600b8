//! Trait abstraction for the notification service to enable mocking in tests

use serde::{Deserialize, Serialize};

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A request to show a short-lived message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Build a `Default` notification titled "Success"
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Default,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    /// Build a `Destructive` notification titled "Error"
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Fire-and-forget sink for notifications.
///
/// The form only talks to this trait, so its logic can be tested without
/// any rendering.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_uses_default_variant() {
        let n = Notification::success("Registration successful!");
        assert_eq!(n.variant, NotificationVariant::Default);
        assert_eq!(n.title, "Success");
        assert!(!n.is_destructive());
    }

    #[test]
    fn test_error_uses_destructive_variant() {
        let n = Notification::error("Passwords do not match");
        assert_eq!(n.variant, NotificationVariant::Destructive);
        assert_eq!(n.title, "Error");
        assert!(n.is_destructive());
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        let json = serde_json::to_string(&Notification::error("x")).unwrap();
        assert!(json.contains(r#""variant":"destructive""#));

        let json = serde_json::to_string(&Notification::success("x")).unwrap();
        assert!(json.contains(r#""variant":"default""#));
    }

    #[test]
    fn test_variant_deserializes_from_wire_name() {
        let json = r#"{"variant":"destructive","title":"Error","description":"boom"}"#;
        let parsed: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Notification::error("boom"));
    }

    #[test]
    fn test_default_variant() {
        assert_eq!(NotificationVariant::default(), NotificationVariant::Default);
    }
}
