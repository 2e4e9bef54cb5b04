//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod menu;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    match &app.state.current_view {
        View::Menu => menu::draw(frame, main_area, app),
        View::SignUp | View::ProfileEdit | View::Appointment => {
            forms::draw_wizard(frame, main_area, app)
        }
    }

    layout::draw_status_bar(frame, app);
}
