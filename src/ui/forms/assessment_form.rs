//! Assessment form rendering: field boxes plus the status/actions row

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{FieldName, FormButton, StatusDirective, StatusIcon};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per field box
const FIELD_HEIGHT: u16 = 3;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Height the form body needs, including its border and margin
pub fn form_height() -> u16 {
    FIELD_HEIGHT * FieldName::ALL.len() as u16 + 4
}

/// Draw the form fields
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = !app.focus.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Assessment Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(FieldName::ALL.map(|_| Constraint::Length(FIELD_HEIGHT)))
        .margin(1)
        .split(area);

    let controller = &app.controller;
    let active = app.focus.active_field();
    for (field, chunk) in FieldName::ALL.into_iter().zip(chunks.iter()) {
        draw_field(
            frame,
            *chunk,
            controller.values(),
            field,
            FieldView {
                is_active: active == Some(field),
                is_dirty: controller.dirty_fields().contains(&field),
                error: controller.errors().get(field),
            },
        );
    }
}

fn icon_span(icon: StatusIcon, tick: usize) -> Span<'static> {
    match icon {
        StatusIcon::None => Span::raw(""),
        StatusIcon::Error => Span::styled("✖ ", Style::default().fg(Color::Red)),
        StatusIcon::Spinner => Span::styled(
            format!("{} ", SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]),
            Style::default().fg(Color::Cyan),
        ),
        StatusIcon::Check => Span::styled("✔ ", Style::default().fg(Color::Green)),
    }
}

/// Status text with its icon and, when details exist, a pointer to the overlay
pub fn status_line(status: &StatusDirective, tick: usize) -> Line<'static> {
    let mut spans = vec![icon_span(status.icon, tick), Span::raw(status.text.clone())];
    if status.detail.is_some() {
        spans.push(Span::styled(
            format!("  ({} for details)", crate::platform::DETAILS_SHORTCUT),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Draw the status region and the Submit/Reset buttons
pub fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.controller.status();
    let on_buttons = app.focus.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Status
            Constraint::Length(12), // Submit
            Constraint::Length(11), // Reset
        ])
        .split(area);

    let status_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(chunks[0])[1];
    frame.render_widget(Paragraph::new(status_line(&status, app.tick)), status_area);

    let button_area = |chunk: Rect| Rect {
        height: chunk.height.min(BUTTON_HEIGHT),
        ..chunk
    };
    render_button(
        frame,
        button_area(chunks[1]),
        FormButton::Submit.label(),
        on_buttons && app.focus.selected_button == FormButton::Submit,
        status.submit_enabled,
        Color::Green,
    );
    render_button(
        frame,
        button_area(chunks[2]),
        FormButton::Reset.label(),
        on_buttons && app.focus.selected_button == FormButton::Reset,
        status.reset_enabled,
        Color::Yellow,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(icon: StatusIcon, text: &str, detail: Option<Vec<String>>) -> StatusDirective {
        StatusDirective {
            icon,
            text: text.to_string(),
            detail,
            detail_open: false,
            submit_enabled: false,
            reset_enabled: true,
        }
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_form_height_fits_all_fields() {
        assert_eq!(form_height(), 19);
    }

    #[test]
    fn test_status_line_without_detail() {
        let line = status_line(&directive(StatusIcon::Check, "Submitted", None), 0);
        assert_eq!(plain(&line), "✔ Submitted");
    }

    #[test]
    fn test_status_line_points_to_details() {
        let line = status_line(
            &directive(StatusIcon::Error, "Errors: 2", Some(vec![String::new()])),
            0,
        );
        let text = plain(&line);
        assert!(text.starts_with("✖ Errors: 2"));
        assert!(text.contains("for details"));
    }

    #[test]
    fn test_spinner_advances_with_tick() {
        let first = plain(&status_line(&directive(StatusIcon::Spinner, "Submitting...", None), 0));
        let second = plain(&status_line(&directive(StatusIcon::Spinner, "Submitting...", None), 1));
        assert_ne!(first, second);
        assert!(first.ends_with("Submitting..."));
    }
}
