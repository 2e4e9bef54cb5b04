//! Multi-step form screen

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use super::progress::{draw_progress, PROGRESS_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the open form: progress, the current step's fields and a help line
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.state.form.session() else {
        return;
    };
    let view = session.view();

    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(PROGRESS_HEIGHT)];
    constraints.extend(view.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    draw_progress(frame, chunks[0], &view.steps, view.current_step);

    for (index, field) in view.fields.iter().enumerate() {
        draw_field(frame, chunks[index + 1], field);
    }

    let help = if view.is_last_step {
        "Enter: submit  Esc: previous step"
    } else if view.current_step == 0 {
        "Enter: next step  Esc: back to menu"
    } else {
        "Enter: next step  Esc: previous step"
    };
    draw_help_text(frame, chunks[chunks.len() - 1], help);
}
