//! Application state definitions

use super::forms::RegistrationForm;
use super::toast_state::ToastQueue;
use crate::config::TuiConfig;

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// The registration form being edited
    pub form: RegistrationForm,
    /// Toasts currently on screen
    pub toasts: ToastQueue,
    /// Character used to render masked inputs
    pub mask_char: char,
    /// One-line hint shown in the status bar (e.g. quit confirmation)
    pub status_message: Option<String>,
}

impl AppState {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            form: RegistrationForm::new(),
            toasts: ToastQueue::new(config.toast_duration(), config.max_toasts()),
            mask_char: config.mask_char(),
            status_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}
