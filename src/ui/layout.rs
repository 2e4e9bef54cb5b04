//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{MenuItem, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(MenuItem::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let in_menu = app.state.current_view == View::Menu;
    for (idx, item) in MenuItem::ALL.iter().enumerate() {
        let is_selected = if in_menu {
            idx == app.state.menu_index
        } else {
            item.view() == Some(app.state.current_view)
        };

        // Other entries are unreachable while a form is open
        let is_enabled = in_menu || is_selected;

        render_sidebar_button(
            frame,
            chunks[idx + 1],
            idx + 1,
            item.label(),
            is_selected,
            is_enabled,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(status) = &app.state.status {
        let color = if status.is_error() { Color::Red } else { Color::Green };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(status.text(), Style::default().fg(color)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(Color::Black).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Menu => "j/k:nav  Enter:open  1-4:jump  q:quit",
        View::SignUp | View::ProfileEdit | View::Appointment => {
            "Tab:next  ←/→:choose  Space:toggle  Enter:continue  Alt+1-9:step  Esc:back"
        }
    }
}
