//! Form field value objects

/// Identifies one of the registration form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 3] = [
        FieldName::Username,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Input name as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Whether this field takes part in the password match check
    pub fn is_password_pair(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub is_masked: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: FieldName, label: &str, placeholder: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create a new masked field (rendered with a mask character)
    pub fn masked(name: FieldName, label: &str, placeholder: &str) -> Self {
        Self {
            is_masked: true,
            ..Self::text(name, label, placeholder)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering, masking each char if needed
    pub fn display_value(&self, mask_char: char) -> String {
        if self.is_masked {
            std::iter::repeat(mask_char)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
