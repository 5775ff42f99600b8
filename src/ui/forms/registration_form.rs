//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, ValidationError};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed by the card: borders, margins, header, fields, inline
/// error and button
pub const FORM_HEIGHT: u16 = 2 + 4 + 3 + FIELD_HEIGHT * 3 + 1 + BUTTON_HEIGHT;

/// Preferred card width
pub const FORM_WIDTH: u16 = 50;

/// Draw the registration card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mask_char = app.state.mask_char;
    let mismatch = form.password_mismatch();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(1),             // Inline error
            Constraint::Length(BUTTON_HEIGHT), // Register button
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    draw_header(frame, chunks[0]);

    for (idx, chunk) in chunks[1..4].iter().enumerate() {
        let Some(field) = form.get_field(idx) else {
            continue;
        };
        let is_invalid = mismatch && idx == 2;
        draw_field(
            frame,
            *chunk,
            field,
            form.active_field_index == idx,
            is_invalid,
            mask_char,
        );
    }

    if mismatch {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {}", ValidationError::PasswordMismatch),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, chunks[4]);
    }

    render_action_button(frame, chunks[5], "Register", form.is_button_active());
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Register",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create your account",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}
