//! Field rendering utilities for forms

use crate::state::{FieldName, FormValues};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-field rendering flags
pub struct FieldView<'a> {
    pub is_active: bool,
    pub is_dirty: bool,
    pub error: Option<&'a str>,
}

fn border_style(view: &FieldView) -> Style {
    if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(field: FieldName, view: &FieldView) -> Block<'static> {
    let marker = if view.is_dirty { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{marker} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(view));
    if let Some(error) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Content line for a field value
pub fn field_line(values: &FormValues, field: FieldName, is_active: bool) -> Line<'static> {
    let active = Style::default().fg(Color::Cyan);
    let muted = Style::default().fg(Color::DarkGray);

    match field {
        FieldName::Name | FieldName::Email => {
            let text = values.text(field);
            let mut spans = if text.is_empty() && !is_active {
                vec![Span::styled("(empty)", muted)]
            } else {
                vec![Span::raw(text.to_string())]
            };
            if is_active {
                spans.push(Span::styled("▌", active));
            }
            Line::from(spans)
        }
        FieldName::FavoriteSeries => {
            let arrow = if is_active { active } else { muted };
            Line::from(vec![
                Span::styled("◀ ", arrow),
                Span::raw(values.favorite_series.title()),
                Span::styled(" ▶", arrow),
            ])
        }
        FieldName::WillProceed => {
            let chosen = Style::default()
                .fg(if is_active { Color::Cyan } else { Color::White })
                .add_modifier(Modifier::REVERSED);
            let (yes, no) = if values.will_proceed {
                (chosen, muted)
            } else {
                (muted, chosen)
            };
            Line::from(vec![
                Span::styled(" Yes ", yes),
                Span::raw(" "),
                Span::styled(" No ", no),
            ])
        }
        FieldName::SimulateError => {
            let check = if values.simulate_error {
                Span::styled("[✔]", Style::default().fg(Color::Green))
            } else {
                Span::styled("[ ]", if is_active { active } else { muted })
            };
            Line::from(vec![check, Span::raw(" return an error from the endpoint")])
        }
    }
}

/// Draw one form field inside its bordered box
pub fn draw_field(frame: &mut Frame, area: Rect, values: &FormValues, field: FieldName, view: FieldView) {
    let content = Paragraph::new(field_line(values, field, view.is_active));
    frame.render_widget(content.block(field_block(field, &view)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_text_shows_placeholder_when_inactive() {
        let values = FormValues::default();
        assert_eq!(plain(&field_line(&values, FieldName::Name, false)), "(empty)");
        assert_eq!(plain(&field_line(&values, FieldName::Name, true)), "▌");
    }

    #[test]
    fn test_series_shows_title_between_arrows() {
        let values = FormValues::default();
        assert_eq!(
            plain(&field_line(&values, FieldName::FavoriteSeries, false)),
            "◀ The Next Generation ▶"
        );
    }

    #[test]
    fn test_checkbox_reflects_value() {
        let mut values = FormValues::default();
        assert!(plain(&field_line(&values, FieldName::SimulateError, false)).starts_with("[ ]"));
        values.simulate_error = true;
        assert!(plain(&field_line(&values, FieldName::SimulateError, false)).starts_with("[✔]"));
    }
}
