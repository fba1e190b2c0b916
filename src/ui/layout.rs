//! Layout components (header, notice line, help bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::platform::{DETAILS_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const WELCOME: &str = "Welcome to the Steam Logistics Assessment";
const SUBTITLE: &str = "Please fill out this form and we will get back to you soon.";

/// Rows used by the header
const HEADER_HEIGHT: u16 = 3;

/// Screen regions, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub actions: Rect,
    pub notice: Rect,
    pub help: Rect,
}

/// Split the screen into header, form, actions, notice and help bar
pub fn create_layout(area: Rect, form_height: u16) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(form_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Notice
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        form: chunks[1],
        actions: chunks[2],
        notice: chunks[3],
        help: chunks[5],
    }
}

/// Draw the welcome header, with the time of the last successful submission
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            WELCOME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    if let Some(at) = app.controller.store().committed_at() {
        lines.push(Line::from(Span::styled(
            format!("Last submitted {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the last submission notice, if any
pub fn draw_notice(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(notice) = &app.notice {
        let color = if notice.starts_with("API Error") {
            Color::Red
        } else {
            Color::Green
        };
        frame.render_widget(
            Paragraph::new(Span::styled(notice.as_str(), Style::default().fg(color))),
            area,
        );
    }
}

/// Key hints for the current screen
pub fn help_text(overlay_open: bool) -> String {
    if overlay_open {
        "Enter/Esc:close".to_string()
    } else {
        format!(
            "Tab:next  Shift+Tab:prev  ←/→/Space:change  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  {DETAILS_SHORTCUT}:errors"
        )
    }
}

/// Draw the help bar
pub fn draw_help_bar(frame: &mut Frame, area: Rect, overlay_open: bool) {
    let quit_hint = " ^C:quit ";
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(quit_hint.len() as u16),
        ])
        .split(area);

    let hints = Paragraph::new(Span::styled(
        format!(" {}", help_text(overlay_open)),
        Style::default().fg(Color::Gray),
    ))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(hints, chunks[0]);

    let quit = Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let layout = create_layout(Rect::new(0, 0, 80, 40), 19);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.form.y, HEADER_HEIGHT);
        assert_eq!(layout.form.height, 19);
        assert_eq!(layout.actions.y, HEADER_HEIGHT + 19);
        assert_eq!(layout.notice.y, layout.actions.y + BUTTON_HEIGHT);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_help_text_lists_shortcuts() {
        let text = help_text(false);
        assert!(text.contains(SUBMIT_SHORTCUT));
        assert!(text.contains(RESET_SHORTCUT));
        assert!(text.contains(DETAILS_SHORTCUT));
    }

    #[test]
    fn test_help_text_with_overlay() {
        assert_eq!(help_text(true), "Enter/Esc:close");
    }
}
