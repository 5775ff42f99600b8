//! Application state and core logic

use crate::config::TuiConfig;
use crate::notify::{Notification, Notifier};
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
const QUIT_CONFIRM_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state: expire toasts and the quit hint
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.state.toasts.tick_at(now);
        if let Some(at) = self.last_ctrl_c {
            if now.saturating_duration_since(at) > QUIT_CONFIRM_WINDOW {
                self.last_ctrl_c = None;
                self.state.status_message = None;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c(Instant::now());
            return;
        }

        // Any other key cancels a pending quit
        self.last_ctrl_c = None;
        self.state.status_message = None;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('u') if ctrl => self.state.form.clear_active(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard();
            }
            KeyCode::Esc => self.state.toasts.dismiss_all(),
            KeyCode::Backspace => self.state.form.pop_char(),
            KeyCode::Char(c)
                if !ctrl
                    && !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form.push_char(c);
            }
            _ => {}
        }
    }

    /// Handle text delivered by the terminal's bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        self.state.form.push_str(text);
    }

    fn handle_ctrl_c(&mut self, now: Instant) {
        match self.last_ctrl_c {
            Some(at) if now.saturating_duration_since(at) <= QUIT_CONFIRM_WINDOW => {
                tracing::info!("quit requested");
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Validate and submit the form, notifying through the toast queue
    fn submit(&mut self) {
        let state = &mut self.state;
        match state.form.submit(&mut state.toasts) {
            Ok(()) => {
                tracing::info!("registration submitted");
                state.form.set_active_field(0);
            }
            Err(err) => tracing::debug!(%err, "registration rejected"),
        }
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.handle_paste(&text),
            Err(err) => {
                tracing::warn!("clipboard read failed: {err:#}");
                self.state
                    .toasts
                    .notify(Notification::error("Could not read the clipboard"));
            }
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
