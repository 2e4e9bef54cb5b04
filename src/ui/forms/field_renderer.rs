//! Field rendering utilities for forms

use crate::state::FieldView;
use medibook::form::FieldKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows one field takes: border, value, border
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one field; an invalid field gets a red border and its error in the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let is_active = field.is_active;

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (&field.error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let display_str = if field.value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        field.value.clone()
    };

    let mut spans = Vec::with_capacity(3);
    if matches!(field.kind, FieldKind::Choice(_)) && is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(display_str, style));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    } else {
        let editable = !matches!(field.kind, FieldKind::Toggle | FieldKind::Choice(_));
        spans.push(Span::styled(display_str, style));
        if is_active && editable {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a dim help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
