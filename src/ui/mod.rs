//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area(), forms::form_height());
    let status = app.controller.status();

    layout::draw_header(frame, screen.header, app);
    forms::draw_form(frame, screen.form, app);
    forms::draw_actions(frame, screen.actions, app);
    layout::draw_notice(frame, screen.notice, app);
    layout::draw_help_bar(frame, screen.help, status.detail_open);

    // Error overlay sits above everything else
    if status.detail_open {
        if let Some(detail) = &status.detail {
            components::render_error_dialog(frame, detail);
        }
    }
}
