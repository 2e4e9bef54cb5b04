//! The booking app's forms
//!
//! Each form names its fields, groups them into steps and supplies the rules
//! that decide which fields are invalid.

mod appointment;
mod patient;
mod profile;
mod sign_up;

pub use appointment::{Appointment, AppointmentField};
pub use patient::{PatientField, COUNTRIES};
pub use profile::ProfileEdit;
pub use sign_up::{SignUp, SignUpField};

use crate::form::{ErrorKind, ErrorMap, FieldKey, FormStep, MultiStepForm, StepperError, ValueMap};
use crate::validation::{validate_fields, ValidationContext};

/// Static description of one multi-step form
pub trait FormDefinition {
    type Field: FieldKey;

    /// Mutation the completed form is submitted as
    const OPERATION: &'static str;

    /// Heading shown above the form
    const TITLE: &'static str;

    fn steps() -> Vec<FormStep<Self::Field>>;

    /// Rule for one field, with access to the other values for cross-field checks
    fn check(
        field: Self::Field,
        values: &ValueMap<Self::Field>,
        ctx: &ValidationContext,
    ) -> Option<ErrorKind>;

    /// Validate `fields` against the current values
    fn validate(
        values: &ValueMap<Self::Field>,
        fields: &[Self::Field],
        ctx: &ValidationContext,
    ) -> ErrorMap<Self::Field> {
        validate_fields(values, fields, |field, values| Self::check(field, values, ctx))
    }

    /// Multi-step form seeded with `initial_values`
    fn build(
        initial_values: ValueMap<Self::Field>,
    ) -> Result<MultiStepForm<Self::Field>, StepperError> {
        MultiStepForm::new(Self::steps(), initial_values)
    }
}
