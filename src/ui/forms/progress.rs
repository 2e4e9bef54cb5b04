//! Step progress indicator

use medibook::form::StepMeta;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows the progress bar takes
pub const PROGRESS_HEIGHT: u16 = 3;

/// English title of a step
pub fn step_title(meta: &StepMeta) -> &'static str {
    match (meta.namespace, meta.key) {
        (_, "steps.account") => "Account",
        (_, "steps.personal") => "About you",
        (_, "steps.address") => "Address",
        ("signup", "steps.medical") => "Health & terms",
        (_, "steps.medical") => "Health",
        ("appointment", "steps.slot") => "Doctor & time",
        ("appointment", "steps.details") => "Details",
        (_, key) => key,
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "user" => "@",
        "id-card" => "#",
        "home" => "⌂",
        "heart-pulse" => "♥",
        "calendar" => "▦",
        "notes" => "✎",
        _ => "•",
    }
}

/// Spans for every step; finished steps are green, the current one is highlighted
pub fn progress_spans(steps: &[StepMeta], current: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(steps.len() * 2);
    for (index, meta) in steps.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if index == current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if index < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{} {} {}", index + 1, icon_glyph(meta.icon), step_title(meta)),
            style,
        ));
    }
    spans
}

pub fn draw_progress(frame: &mut Frame, area: Rect, steps: &[StepMeta], current: usize) {
    let block = Block::default()
        .title(format!(" Step {} of {} ", current + 1, steps.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(Line::from(progress_spans(steps, current)))
        .block(block);
    frame.render_widget(paragraph, area);
}
