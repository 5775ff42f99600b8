//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (card_area, status_area) =
        layout::create_layout(area, forms::FORM_WIDTH, forms::FORM_HEIGHT);

    forms::draw_registration(frame, card_area, app);

    // Toasts float in the space the card leaves free
    let content_area = Rect {
        height: area.height.saturating_sub(status_area.height),
        ..area
    };
    components::render_toasts(frame, content_area, card_area, &app.state.toasts);

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);
}
