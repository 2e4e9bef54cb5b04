//! Editing the details of an existing patient

use super::patient::{self, PatientField};
use super::FormDefinition;
use crate::form::{ErrorKind, FormStep, ValueMap};
use crate::validation::ValidationContext;

const NAMESPACE: &str = "profile";

/// Profile form; usually seeded from the stored patient record
pub struct ProfileEdit;

impl FormDefinition for ProfileEdit {
    type Field = PatientField;

    const OPERATION: &'static str = "updatePatient";
    const TITLE: &'static str = "Edit your profile";

    fn steps() -> Vec<FormStep<PatientField>> {
        vec![
            FormStep {
                meta: patient::personal_meta(NAMESPACE),
                fields: patient::PERSONAL,
            },
            FormStep {
                meta: patient::address_meta(NAMESPACE),
                fields: patient::ADDRESS,
            },
            FormStep {
                meta: patient::medical_meta(NAMESPACE),
                fields: patient::MEDICAL,
            },
        ]
    }

    fn check(
        field: PatientField,
        values: &ValueMap<PatientField>,
        ctx: &ValidationContext,
    ) -> Option<ErrorKind> {
        patient::check(field, |sibling| values.get(&sibling), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldKey, FieldValue, StepOutcome};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record() -> ValueMap<PatientField> {
        ValueMap::from([
            (PatientField::FirstName, FieldValue::from("Grace")),
            (PatientField::LastName, FieldValue::from("Hopper")),
            (PatientField::BirthDate, FieldValue::from("1986-12-09")),
            (PatientField::PhoneNumber, FieldValue::from("(212) 555 0100")),
            (PatientField::PhoneExtension, FieldValue::from("42")),
            (PatientField::Address, FieldValue::from("350 Fifth Avenue")),
            (PatientField::City, FieldValue::from("New York")),
            (PatientField::Country, FieldValue::from("USA")),
            (PatientField::Province, FieldValue::from("NY")),
            (PatientField::PostalCode, FieldValue::from("10118")),
            (PatientField::MedicalId, FieldValue::from("HOPG 1906 1209")),
            (PatientField::Height, FieldValue::from(168.0)),
            (PatientField::Weight, FieldValue::from(60.0)),
        ])
    }

    #[test]
    fn test_prefilled_profile_is_valid() {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert!(ProfileEdit::validate(&record(), PatientField::ALL, &ctx).is_empty());
    }

    #[test]
    fn test_edit_keeps_other_values_and_flags_the_change() {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let mut form = ProfileEdit::build(record()).unwrap();
        form.handle_change(PatientField::PhoneExtension, "ext 42");

        let outcome =
            form.submit_step(|values, fields| ProfileEdit::validate(values, fields, &ctx));

        assert_eq!(outcome, StepOutcome::Invalid);
        assert_eq!(form.controller().invalid_labels(), vec!["Extension"]);
        assert_eq!(form.controller().dirty_fields(), vec![PatientField::PhoneExtension]);
        assert_eq!(
            form.controller().value(PatientField::FirstName),
            Some(&FieldValue::from("Grace"))
        );
    }

    #[test]
    fn test_whitespace_only_city_is_required() {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let mut values = record();
        values.insert(PatientField::City, FieldValue::from("   "));
        let errors = ProfileEdit::validate(&values, &[PatientField::City], &ctx);
        assert_eq!(errors[&PatientField::City], "CITY_REQUIRED");
    }

    #[test]
    fn test_three_steps() {
        let steps = ProfileEdit::steps();
        let keys: Vec<_> = steps.iter().map(|step| step.meta.key).collect();
        assert_eq!(keys, vec!["steps.personal", "steps.address", "steps.medical"]);
        assert!(steps.iter().all(|step| step.meta.namespace == "profile"));
    }
}
