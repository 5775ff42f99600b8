//! Registration form state and submission

use super::field::{FieldName, FormField};
use super::validation::{compute_mismatch, ValidationError};
use crate::notify::{Notification, Notifier};

/// Description shown after a successful registration
pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Username / password / confirmation form.
///
/// The mismatch flag is never stored: it is derived from the current values
/// and the last password field that was edited.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    /// Last of password/confirmPassword to be edited
    mismatch_focus: Option<FieldName>,
    /// 0-2 are the inputs, 3 is the Register button
    pub active_field_index: usize,
}

impl RegistrationForm {
    /// Index of the Register button in the focus order
    pub const BUTTON_INDEX: usize = 3;

    pub fn new() -> Self {
        Self {
            username: FormField::text(FieldName::Username, "Username", "Enter your username"),
            password: FormField::masked(FieldName::Password, "Password", "Enter your password"),
            confirm_password: FormField::masked(
                FieldName::ConfirmPassword,
                "Confirm Password",
                "Confirm your password",
            ),
            mismatch_focus: None,
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Username => &mut self.username,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Set a field's value. Edits to either password field put that field in
    /// play for the mismatch check.
    pub fn update_field(&mut self, name: FieldName, value: String) {
        self.field_mut(name).set_text(value);
        if name.is_password_pair() {
            self.mismatch_focus = Some(name);
        }
        tracing::trace!(
            field = name.as_str(),
            mismatch = self.password_mismatch(),
            "field updated"
        );
    }

    /// Whether the two password fields currently disagree
    pub fn password_mismatch(&self) -> bool {
        compute_mismatch(
            self.password.as_text(),
            self.confirm_password.as_text(),
            self.mismatch_focus,
        )
    }

    /// Name of the focused input, `None` when the button row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == Self::BUTTON_INDEX
    }

    /// Append a character to the focused input
    pub fn push_char(&mut self, c: char) {
        self.edit_active(|value| value.push(c));
    }

    /// Append pasted text to the focused input. Line breaks are dropped since
    /// every input is single-line.
    pub fn push_str(&mut self, text: &str) {
        self.edit_active(|value| {
            value.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        });
    }

    /// Remove the last character from the focused input
    pub fn pop_char(&mut self) {
        self.edit_active(|value| {
            value.pop();
        });
    }

    /// Empty the focused input
    pub fn clear_active(&mut self) {
        self.edit_active(String::clear);
    }

    /// Apply `edit` to the focused input. Edits that leave the value as it
    /// was are dropped so they don't bring the confirmation into play.
    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        let mut value = self.field(name).as_text().to_string();
        edit(&mut value);
        if value != self.field(name).as_text() {
            self.update_field(name, value);
        }
    }

    /// Check the submission rules in order; the first failure wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password_mismatch() {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(())
    }

    /// Validate and report the outcome through `notifier`.
    ///
    /// On success the fields are reset after notifying. On failure the form
    /// is left untouched.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<(), ValidationError> {
        if let Err(err) = self.validate() {
            notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        notifier.notify(Notification::success(SUCCESS_MESSAGE));
        self.reset();
        Ok(())
    }

    /// Empty all fields and take the confirmation out of play
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.mismatch_focus = None;
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        4 // username, password, confirm, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}
