//! Main application state

use super::forms::FormState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Menu,
    SignUp,
    ProfileEdit,
    Appointment,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        !matches!(self, View::Menu)
    }
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SignUp,
    EditProfile,
    BookAppointment,
    Quit,
}

impl MenuItem {
    pub const ALL: &'static [MenuItem] = &[
        MenuItem::SignUp,
        MenuItem::EditProfile,
        MenuItem::BookAppointment,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::SignUp => "Sign up",
            MenuItem::EditProfile => "Profile",
            MenuItem::BookAppointment => "Appointment",
            MenuItem::Quit => "Quit",
        }
    }

    /// View the item opens
    pub fn view(&self) -> Option<View> {
        match self {
            MenuItem::SignUp => Some(View::SignUp),
            MenuItem::EditProfile => Some(View::ProfileEdit),
            MenuItem::BookAppointment => Some(View::Appointment),
            MenuItem::Quit => None,
        }
    }
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub menu_index: usize,
    pub form: FormState,
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.menu_index < MenuItem::ALL.len() - 1 {
            self.menu_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.menu_index > 0 {
            self.menu_index -= 1;
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index.min(MenuItem::ALL.len() - 1)]
    }

    /// Close any open form and go back to the menu
    pub fn close_form(&mut self) {
        self.form = FormState::None;
        self.current_view = View::Menu;
    }
}
