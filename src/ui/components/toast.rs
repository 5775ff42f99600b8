//! Toast overlay component

use crate::notify::NotificationVariant;
use crate::state::{Toast, ToastQueue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Width of a toast box including borders
const TOAST_WIDTH: u16 = 36;

/// Title, one line of text and borders
const MIN_TOAST_HEIGHT: u16 = 4;

/// Render visible toasts, newest first, in the free space around `card`
pub fn render_toasts(frame: &mut Frame, area: Rect, card: Rect, toasts: &ToastQueue) {
    if toasts.is_empty() {
        return;
    }

    let now = Instant::now();
    let region = toast_region(area, card);
    let width = TOAST_WIDTH.min(region.width);
    let inner_width = width.saturating_sub(4) as usize; // borders + padding
    let x = region.x + region.width.saturating_sub(width + 1);
    let mut y = region.y;

    for toast in toasts.iter().rev() {
        let opacity = toast.opacity_at(now, toasts.lifetime());
        let lines = toast_lines(toast, inner_width, opacity);
        let height = lines.len() as u16 + 2;
        if y + height > region.bottom() {
            break;
        }

        let toast_area = Rect {
            x,
            y,
            width,
            height,
        };
        frame.render_widget(Clear, toast_area);

        let border = accent_color(toast.notification.variant, opacity);
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(paragraph, toast_area);

        y += height;
    }
}

/// Pick where toasts go: right of the card when the column is wide enough,
/// otherwise the taller strip above or below it. Terminals too small for
/// either get the whole area.
fn toast_region(area: Rect, card: Rect) -> Rect {
    let right = Rect {
        x: card.right(),
        y: area.y + 1,
        width: area.right().saturating_sub(card.right()),
        height: area.height.saturating_sub(1),
    };
    if right.width > TOAST_WIDTH {
        return right;
    }

    let above = Rect {
        height: card.y.saturating_sub(area.y),
        ..area
    };
    let below = Rect {
        y: card.bottom(),
        height: area.bottom().saturating_sub(card.bottom()),
        ..area
    };
    let roomier = if below.height >= above.height { below } else { above };
    if roomier.height >= MIN_TOAST_HEIGHT {
        roomier
    } else {
        area
    }
}

/// Color for a toast, dimmed once it is more than half faded
fn accent_color(variant: NotificationVariant, opacity: f32) -> Color {
    if opacity < 0.5 {
        return Color::DarkGray;
    }
    match variant {
        NotificationVariant::Default => Color::Green,
        NotificationVariant::Destructive => Color::Red,
    }
}

fn toast_lines(toast: &Toast, max_width: usize, opacity: f32) -> Vec<Line<'static>> {
    let accent = accent_color(toast.notification.variant, opacity);
    let body = if opacity < 0.5 { Color::DarkGray } else { Color::White };
    let time = toast.created_at.format("%H:%M:%S").to_string();

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {}", toast.notification.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {time}"), Style::default().fg(Color::DarkGray)),
    ])];
    for line in wrap_text(&toast.notification.description, max_width) {
        lines.push(Line::from(Span::styled(
            format!(" {line}"),
            Style::default().fg(body),
        )));
    }
    lines
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}
