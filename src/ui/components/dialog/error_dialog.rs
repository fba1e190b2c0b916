//! Error detail overlay

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the list of validation or submission errors centered on the screen
pub fn render_error_dialog(frame: &mut Frame, errors: &[String]) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to close"),
    ]);

    let mut body = vec![Line::from("The following errors were found:"), Line::from("")];
    body.extend(errors.iter().map(|error| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Red)),
            Span::raw(error.as_str()),
        ])
    }));

    render_dialog(
        frame,
        DialogConfig {
            title: "Errors",
            accent: Color::Red,
            body,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
