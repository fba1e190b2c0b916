//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Body lines, already styled
    pub body: Vec<Line<'a>>,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Center a `width` x `height` box inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows needed to show `lines` wrapped at `inner_width` columns
fn wrapped_height(lines: &[Line], inner_width: u16) -> u16 {
    let inner_width = usize::from(inner_width.max(1));
    lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(inner_width) as u16)
        .sum()
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();

    let widest = config
        .body
        .iter()
        .chain(config.hint.iter())
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .max(config.title.len()) as u16;
    // 2 borders + 2 columns padding on each side
    let width = (widest + 6).min(config.max_width);
    let inner_width = width.saturating_sub(6);

    let mut lines = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(config.body);
    if let Some(hint) = config.hint {
        lines.push(Line::from(""));
        lines.push(hint);
    }

    let height = wrapped_height(&lines, inner_width) + 2;
    let dialog_area = centered_rect(area, width, height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .padding(ratatui::widgets::Padding::horizontal(2)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
