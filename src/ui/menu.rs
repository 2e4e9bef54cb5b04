//! Start screen

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected_menu_item();
    let outbox = app.config.outbox_dir();

    let lines = vec![
        Line::from(Span::styled(
            "Medibook",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Create a patient account, keep your profile up to date"),
        Line::from("and book appointments with your doctor."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(selected.label(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Submissions are saved to {}", outbox.display()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
