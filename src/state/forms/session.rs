//! One open form: the multi-step form plus the focused field

use medibook::form::{
    FieldKey, FieldKind, FieldValue, MultiStepForm, StepMeta, StepOutcome, StepperError, ValueMap,
};
use medibook::forms::FormDefinition;
use medibook::payload::{build_variables, EmptyFieldPolicy, MutationPayload};
use medibook::validation::ValidationContext;
use std::marker::PhantomData;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Everything the renderer needs to draw one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub error: Option<String>,
    pub is_active: bool,
}

/// Snapshot of an open form for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub steps: Vec<StepMeta>,
    pub current_step: usize,
    pub is_last_step: bool,
    pub fields: Vec<FieldView>,
}

/// What submitting the current step led to
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// Labels of the invalid fields
    Invalid(Vec<&'static str>),
    /// Now on this step
    Advanced(usize),
    /// Whole form valid; ready to send
    Completed(MutationPayload),
}

/// Form operations the app drives without knowing which form is open
pub trait FormSessionOps: Form {
    fn view(&self) -> FormView;
    fn step_count(&self) -> usize;
    fn input_char(&mut self, c: char);
    fn backspace(&mut self);
    /// Move a choice field to the next or previous option
    fn cycle_choice(&mut self, forward: bool);
    fn toggle(&mut self);
    fn submit_step(&mut self, ctx: &ValidationContext, policy: EmptyFieldPolicy) -> SubmitResult;
    /// Returns false when already on the first step
    fn back(&mut self) -> bool;
    fn go_to(&mut self, index: usize) -> Result<(), StepperError>;
}

pub struct FormSession<D: FormDefinition> {
    form: MultiStepForm<D::Field>,
    active_field_index: usize,
    definition: PhantomData<D>,
}

impl<D: FormDefinition> std::fmt::Debug for FormSession<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("title", &D::TITLE)
            .field("step", &self.form.stepper().current_index())
            .field("active_field_index", &self.active_field_index)
            .finish()
    }
}

impl<D: FormDefinition> FormSession<D> {
    pub fn new(initial_values: ValueMap<D::Field>) -> Result<Self, StepperError> {
        Ok(Self {
            form: D::build(initial_values)?,
            active_field_index: 0,
            definition: PhantomData,
        })
    }

    pub fn form(&self) -> &MultiStepForm<D::Field> {
        &self.form
    }

    fn step_fields(&self) -> &'static [D::Field] {
        self.form.current_step().fields
    }

    fn active_key(&self) -> Option<D::Field> {
        self.step_fields().get(self.active_field_index).copied()
    }

    fn active_text(&self, key: D::Field) -> String {
        self.form
            .controller()
            .value(key)
            .map(FieldValue::display)
            .unwrap_or_default()
    }

    /// Focus the first invalid field of the step, or the first field
    fn focus_first_error(&mut self) {
        let controller = self.form.controller();
        self.active_field_index = self
            .step_fields()
            .iter()
            .position(|key| controller.error(*key).is_some())
            .unwrap_or(0);
    }
}

fn accepts_char(kind: FieldKind, c: char) -> bool {
    match kind {
        FieldKind::Text | FieldKind::Secret => !c.is_control(),
        FieldKind::Number => c.is_ascii_digit() || c == '.',
        FieldKind::Date => c.is_ascii_digit() || c == '-',
        FieldKind::Toggle | FieldKind::Choice(_) => false,
    }
}

impl<D: FormDefinition> Form for FormSession<D> {
    fn field_count(&self) -> usize {
        self.step_fields().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}

impl<D: FormDefinition> FormSessionOps for FormSession<D> {
    fn view(&self) -> FormView {
        let controller = self.form.controller();
        let fields = self
            .step_fields()
            .iter()
            .enumerate()
            .map(|(index, &key)| {
                let text = self.active_text(key);
                let value = match key.kind() {
                    FieldKind::Secret => "•".repeat(text.chars().count()),
                    FieldKind::Toggle => {
                        let on = controller.value(key).is_some_and(FieldValue::as_bool);
                        if on { "[x]" } else { "[ ]" }.to_string()
                    }
                    _ => text,
                };
                FieldView {
                    label: key.label(),
                    value,
                    kind: key.kind(),
                    error: controller
                        .error(key)
                        .map(|code| format!("{} ({code})", code.kind().message())),
                    is_active: index == self.active_field_index,
                }
            })
            .collect();

        FormView {
            title: D::TITLE,
            steps: self.form.stepper().steps().iter().map(|s| s.meta).collect(),
            current_step: self.form.stepper().current_index(),
            is_last_step: self.form.stepper().is_last(),
            fields,
        }
    }

    fn step_count(&self) -> usize {
        self.form.stepper().len()
    }

    fn input_char(&mut self, c: char) {
        let Some(key) = self.active_key() else {
            return;
        };
        if !accepts_char(key.kind(), c) {
            return;
        }
        let mut text = self.active_text(key);
        text.push(c);
        self.form.handle_change(key, text);
    }

    fn backspace(&mut self) {
        let Some(key) = self.active_key() else {
            return;
        };
        if matches!(key.kind(), FieldKind::Toggle | FieldKind::Choice(_)) {
            return;
        }
        let mut text = self.active_text(key);
        text.pop();
        self.form.handle_change(key, text);
    }

    fn cycle_choice(&mut self, forward: bool) {
        let Some(key) = self.active_key() else {
            return;
        };
        let FieldKind::Choice(options) = key.kind() else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.active_text(key);
        let next = match options.iter().position(|o| *o == current) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None => 0,
        };
        self.form.handle_change(key, options[next]);
    }

    fn toggle(&mut self) {
        let Some(key) = self.active_key() else {
            return;
        };
        if key.kind() != FieldKind::Toggle {
            return;
        }
        let on = self
            .form
            .controller()
            .value(key)
            .is_some_and(FieldValue::as_bool);
        self.form.handle_change(key, !on);
    }

    fn submit_step(&mut self, ctx: &ValidationContext, policy: EmptyFieldPolicy) -> SubmitResult {
        let outcome = self
            .form
            .submit_step(|values, fields| D::validate(values, fields, ctx));
        match outcome {
            StepOutcome::Invalid => {
                self.focus_first_error();
                SubmitResult::Invalid(self.form.controller().invalid_labels())
            }
            StepOutcome::Advanced(index) => {
                self.active_field_index = 0;
                SubmitResult::Advanced(index)
            }
            StepOutcome::Completed => {
                let variables = build_variables(&self.form.controller().values(), policy);
                SubmitResult::Completed(MutationPayload::new(D::OPERATION, variables))
            }
        }
    }

    fn back(&mut self) -> bool {
        if self.form.stepper().is_first() {
            return false;
        }
        self.form.back();
        self.active_field_index = 0;
        true
    }

    fn go_to(&mut self, index: usize) -> Result<(), StepperError> {
        self.form.go_to(index)?;
        self.active_field_index = 0;
        Ok(())
    }
}
