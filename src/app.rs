//! Application state and core logic

use crate::state::{
    AppState, Form, FormSession, FormSessionOps, FormState, MenuItem, StatusMessage, SubmitResult,
    View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use medibook::config::AppConfig;
use medibook::form::{FieldValue, ValueMap};
use medibook::forms::{FormDefinition, PatientField, ProfileEdit, SignUp, SignUpField};
use medibook::payload::{values_from_record, JsonOutbox, MutationPayload, PayloadSink};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: AppConfig,
    /// Where completed forms go
    sink: Box<dyn PayloadSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an app that stores submissions in the configured outbox
    pub fn new(config: AppConfig) -> Self {
        let outbox = JsonOutbox::new(config.outbox_dir());
        tracing::info!(outbox = %outbox.dir().display(), "Starting medibook");
        Self::with_sink(config, Box::new(outbox))
    }

    pub fn with_sink(config: AppConfig, sink: Box<dyn PayloadSink>) -> Self {
        Self {
            state: AppState::default(),
            config,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.state.status = Some(StatusMessage::Info(message.into()));
    }

    /// Show an error in the status bar
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.status = Some(StatusMessage::Error(message.into()));
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Messages only last until the next key press
        self.state.status = None;

        if self.state.current_view.is_form_view() {
            self.handle_form_key(key).await
        } else {
            self.handle_menu_key(key).await
        }
    }

    async fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Enter => {
                let item = self.state.selected_menu_item();
                self.open(item).await?;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(&item) = MenuItem::ALL.get(index) {
                    self.state.menu_index = index;
                    self.open(item).await?;
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Open the form behind a menu entry
    async fn open(&mut self, item: MenuItem) -> Result<()> {
        let form = match item {
            MenuItem::SignUp => FormState::SignUp(FormSession::new(self.sign_up_defaults())?),
            MenuItem::EditProfile => {
                FormState::Profile(FormSession::new(self.stored_profile().await)?)
            }
            MenuItem::BookAppointment => {
                FormState::Appointment(FormSession::new(ValueMap::new())?)
            }
            MenuItem::Quit => {
                self.quit = true;
                return Ok(());
            }
        };
        if let Some(view) = item.view() {
            tracing::debug!(?view, "Opening form");
            self.state.current_view = view;
            self.state.form = form;
        }
        Ok(())
    }

    fn sign_up_defaults(&self) -> ValueMap<SignUpField> {
        ValueMap::from([(
            SignUpField::Patient(PatientField::Country),
            FieldValue::from(self.config.country()),
        )])
    }

    /// Values of the last saved profile, falling back to the last sign-up
    async fn stored_profile(&self) -> ValueMap<PatientField> {
        for operation in [ProfileEdit::OPERATION, SignUp::OPERATION] {
            match self.sink.latest(operation).await {
                Ok(Some(payload)) => return values_from_record(&payload.variables),
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to read stored {operation}: {e:#}"),
            }
        }
        ValueMap::from([(PatientField::Country, FieldValue::from(self.config.country()))])
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Enter {
            self.submit_step().await;
            return Ok(());
        }

        let Some(session) = self.state.form.session_mut() else {
            self.state.close_form();
            return Ok(());
        };

        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                let Some(step) = c.to_digit(10).filter(|d| *d > 0) else {
                    return Ok(());
                };
                if let Err(e) = session.go_to(step as usize - 1) {
                    self.push_error(e.to_string());
                }
            }
            KeyCode::Esc => {
                if !session.back() {
                    self.state.close_form();
                }
            }
            KeyCode::Tab | KeyCode::Down => session.next_field(),
            KeyCode::BackTab | KeyCode::Up => session.prev_field(),
            KeyCode::Left => session.cycle_choice(false),
            KeyCode::Right => session.cycle_choice(true),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Char(c) => {
                if c == ' ' {
                    session.toggle();
                }
                session.input_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_step(&mut self) {
        let ctx = self.config.validation_context();
        let policy = self.config.empty_field_policy();
        let Some(session) = self.state.form.session_mut() else {
            return;
        };
        let step_count = session.step_count();

        match session.submit_step(&ctx, policy) {
            SubmitResult::Invalid(labels) => {
                tracing::debug!(fields = ?labels, "Step rejected");
                self.push_error(format!("Please check: {}", labels.join(", ")));
            }
            SubmitResult::Advanced(index) => {
                self.set_status(format!("Step {} of {step_count}", index + 1));
            }
            SubmitResult::Completed(payload) => self.send(payload).await,
        }
    }

    async fn send(&mut self, payload: MutationPayload) {
        match self.sink.submit(&payload).await {
            Ok(id) => {
                tracing::info!(operation = %payload.operation, %id, "Form submitted");
                let view = self.state.current_view;
                self.state.close_form();
                self.set_status(format!("{} saved ({id})", saved_label(view)));
            }
            Err(e) => {
                // Form stays open so the user can retry
                tracing::error!("Failed to submit {}: {e:#}", payload.operation);
                self.push_error(format!("Could not save: {e}"));
            }
        }
    }
}

fn saved_label(view: View) -> &'static str {
    match view {
        View::SignUp => "Account",
        View::ProfileEdit => "Profile",
        View::Appointment => "Appointment",
        View::Menu => "Form",
    }
}
