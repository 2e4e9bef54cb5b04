//! Multi-step form: a stepper over field groups sharing one controller

use super::controller::FormStateController;
use super::field::{ErrorMap, FieldKey, FieldValue, ValueMap};
use super::stepper::{Stepper, StepperError};

/// Display metadata for the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMeta {
    /// Icon identifier
    pub icon: &'static str,
    /// Translation key of the step title
    pub key: &'static str,
    /// Translation namespace the key lives in
    pub namespace: &'static str,
}

/// One page of a multi-step form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStep<K: 'static> {
    pub meta: StepMeta,
    pub fields: &'static [K],
}

/// Result of submitting the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Some field failed validation; errors are stored on the controller
    Invalid,
    /// Moved on to the step at this index
    Advanced(usize),
    /// The last step passed and the whole form is valid
    Completed,
}

#[derive(Debug, Clone)]
pub struct MultiStepForm<K: FieldKey> {
    controller: FormStateController<K>,
    stepper: Stepper<FormStep<K>>,
}

impl<K: FieldKey> MultiStepForm<K> {
    pub fn new(steps: Vec<FormStep<K>>, initial_values: ValueMap<K>) -> Result<Self, StepperError> {
        Ok(Self {
            controller: FormStateController::new(initial_values),
            stepper: Stepper::new(steps)?,
        })
    }

    /// Validate the fields of the current step and move on.
    ///
    /// `validate` receives the full value map and the fields to check. On the
    /// last step the whole form is validated again, since steps can be skipped
    /// with [`go_to`](Self::go_to); the form then jumps to the first step that
    /// holds an error.
    pub fn submit_step<V>(&mut self, validate: V) -> StepOutcome
    where
        V: Fn(&ValueMap<K>, &[K]) -> ErrorMap<K>,
    {
        let fields = self.stepper.current().fields;
        let is_last = self.stepper.is_last();
        let stepper = &mut self.stepper;
        let outcome = self.controller.handle_submit(
            |values| validate(values, fields),
            || {
                if is_last {
                    StepOutcome::Completed
                } else {
                    stepper.next();
                    StepOutcome::Advanced(stepper.current_index())
                }
            },
        );

        match outcome {
            Some(StepOutcome::Completed) => self.validate_all(&validate),
            Some(outcome) => outcome,
            None => StepOutcome::Invalid,
        }
    }

    fn validate_all<V>(&mut self, validate: &V) -> StepOutcome
    where
        V: Fn(&ValueMap<K>, &[K]) -> ErrorMap<K>,
    {
        let complete = self
            .controller
            .handle_submit(|values| validate(values, K::ALL), || ());
        if complete.is_some() {
            return StepOutcome::Completed;
        }
        let errors = self.controller.errors();
        self.stepper
            .go_to_first(|step| step.fields.iter().any(|key| errors.contains_key(key)));
        StepOutcome::Invalid
    }

    pub fn back(&mut self) {
        self.stepper.back();
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), StepperError> {
        self.stepper.go_to(index)
    }

    pub fn handle_change(&mut self, key: K, value: impl Into<FieldValue>) {
        self.controller.handle_change(key, value);
    }

    pub fn merge(&mut self, partial: ValueMap<K>) {
        self.controller.merge(partial);
    }

    pub fn controller(&self) -> &FormStateController<K> {
        &self.controller
    }

    pub fn stepper(&self) -> &Stepper<FormStep<K>> {
        &self.stepper
    }

    pub fn current_step(&self) -> &FormStep<K> {
        self.stepper.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::tests::LoginField;
    use crate::form::field::{ErrorCode, ErrorKind};
    use pretty_assertions::assert_eq;

    const META: StepMeta = StepMeta {
        icon: "user",
        key: "account",
        namespace: "signup",
    };

    fn steps() -> Vec<FormStep<LoginField>> {
        vec![
            FormStep {
                meta: META,
                fields: &[LoginField::Email],
            },
            FormStep {
                meta: META,
                fields: &[LoginField::Password],
            },
            FormStep {
                meta: META,
                fields: &[LoginField::Remember],
            },
        ]
    }

    fn require(values: &ValueMap<LoginField>, fields: &[LoginField]) -> ErrorMap<LoginField> {
        fields
            .iter()
            .copied()
            .filter(|key| values.get(key).map_or(true, FieldValue::is_blank))
            .map(|key| (key, ErrorCode::for_field(key, ErrorKind::Required)))
            .collect()
    }

    #[test]
    fn test_empty_steps_rejected() {
        let result = MultiStepForm::<LoginField>::new(vec![], ValueMap::new());
        assert_eq!(result.unwrap_err(), StepperError::NoSteps);
    }

    #[test]
    fn test_invalid_step_stays_put() {
        let mut form = MultiStepForm::new(steps(), ValueMap::new()).unwrap();
        assert_eq!(form.submit_step(require), StepOutcome::Invalid);
        assert_eq!(form.stepper().current_index(), 0);
        assert_eq!(form.controller().invalid_labels(), vec!["Email"]);
    }

    #[test]
    fn test_only_current_step_fields_are_checked() {
        let mut form = MultiStepForm::new(steps(), ValueMap::new()).unwrap();
        form.handle_change(LoginField::Email, "ada@example.com");
        assert_eq!(form.submit_step(require), StepOutcome::Advanced(1));
        assert!(!form.controller().has_errors());
    }

    #[test]
    fn test_last_step_completes() {
        let mut form = MultiStepForm::new(steps(), ValueMap::new()).unwrap();
        form.handle_change(LoginField::Email, "ada@example.com");
        form.submit_step(require);
        form.handle_change(LoginField::Password, "abc12345!");
        assert_eq!(form.submit_step(require), StepOutcome::Advanced(2));
        form.handle_change(LoginField::Remember, true);
        assert_eq!(form.submit_step(require), StepOutcome::Completed);
        assert_eq!(form.stepper().current_index(), 2);
    }

    #[test]
    fn test_skipped_step_sends_user_back() {
        let mut form = MultiStepForm::new(steps(), ValueMap::new()).unwrap();
        form.handle_change(LoginField::Email, "ada@example.com");
        form.go_to(2).unwrap();
        form.handle_change(LoginField::Remember, true);

        assert_eq!(form.submit_step(require), StepOutcome::Invalid);
        assert_eq!(form.stepper().current_index(), 1);
        assert_eq!(form.controller().invalid_labels(), vec!["Password"]);
    }

    #[test]
    fn test_back_and_go_to_delegate() {
        let mut form = MultiStepForm::new(steps(), ValueMap::new()).unwrap();
        form.go_to(2).unwrap();
        form.back();
        assert_eq!(form.stepper().current_index(), 1);
        assert!(form.go_to(5).is_err());
        assert_eq!(form.current_step().fields, &[LoginField::Password]);
    }
}
