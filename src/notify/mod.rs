//! Notification port used by the form to surface transient messages

mod traits;

pub use traits::{Notification, NotificationVariant, Notifier};

#[cfg(test)]
pub use traits::MockNotifier;
