//! Patient registration: account, personal details, address, medical details

use super::patient::{self, PatientField};
use super::FormDefinition;
use crate::form::{ErrorKind, FieldKey, FieldKind, FormStep, StepMeta, ValueMap};
use crate::validation::{patterns, rules, ValidationContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Email,
    Username,
    Password,
    ConfirmPassword,
    Patient(PatientField),
    AcceptTerms,
}

use SignUpField::Patient;

impl FieldKey for SignUpField {
    const ALL: &'static [Self] = &[
        Self::Email,
        Self::Username,
        Self::Password,
        Self::ConfirmPassword,
        Patient(PatientField::FirstName),
        Patient(PatientField::LastName),
        Patient(PatientField::BirthDate),
        Patient(PatientField::PhoneNumber),
        Patient(PatientField::PhoneExtension),
        Patient(PatientField::Address),
        Patient(PatientField::City),
        Patient(PatientField::Country),
        Patient(PatientField::Province),
        Patient(PatientField::PostalCode),
        Patient(PatientField::MedicalId),
        Patient(PatientField::Height),
        Patient(PatientField::Weight),
        Self::AcceptTerms,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Patient(field) => field.name(),
            Self::AcceptTerms => "acceptTerms",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
            Self::Patient(field) => field.label(),
            Self::AcceptTerms => "I accept the terms of use",
        }
    }

    fn code_prefix(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Username => "USERNAME",
            Self::Password => "PASSWORD",
            Self::ConfirmPassword => "CONFIRMPASSWORD",
            Self::Patient(field) => field.code_prefix(),
            Self::AcceptTerms => "TERMS",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Password | Self::ConfirmPassword => FieldKind::Secret,
            Self::Patient(field) => field.kind(),
            Self::AcceptTerms => FieldKind::Toggle,
            Self::Email | Self::Username => FieldKind::Text,
        }
    }

    fn is_client_only(&self) -> bool {
        matches!(self, Self::ConfirmPassword)
    }
}

const NAMESPACE: &str = "signup";

const ACCOUNT: &[SignUpField] = &[
    SignUpField::Email,
    SignUpField::Username,
    SignUpField::Password,
    SignUpField::ConfirmPassword,
];

const PERSONAL: &[SignUpField] = &[
    Patient(PatientField::FirstName),
    Patient(PatientField::LastName),
    Patient(PatientField::BirthDate),
    Patient(PatientField::PhoneNumber),
    Patient(PatientField::PhoneExtension),
];

const ADDRESS: &[SignUpField] = &[
    Patient(PatientField::Address),
    Patient(PatientField::City),
    Patient(PatientField::Country),
    Patient(PatientField::Province),
    Patient(PatientField::PostalCode),
];

const MEDICAL: &[SignUpField] = &[
    Patient(PatientField::MedicalId),
    Patient(PatientField::Height),
    Patient(PatientField::Weight),
    SignUpField::AcceptTerms,
];

/// Patient sign-up form
pub struct SignUp;

impl FormDefinition for SignUp {
    type Field = SignUpField;

    const OPERATION: &'static str = "signUp";
    const TITLE: &'static str = "Create your account";

    fn steps() -> Vec<FormStep<SignUpField>> {
        vec![
            FormStep {
                meta: StepMeta {
                    icon: "user",
                    key: "steps.account",
                    namespace: NAMESPACE,
                },
                fields: ACCOUNT,
            },
            FormStep {
                meta: patient::personal_meta(NAMESPACE),
                fields: PERSONAL,
            },
            FormStep {
                meta: patient::address_meta(NAMESPACE),
                fields: ADDRESS,
            },
            FormStep {
                meta: patient::medical_meta(NAMESPACE),
                fields: MEDICAL,
            },
        ]
    }

    fn check(
        field: SignUpField,
        values: &ValueMap<SignUpField>,
        ctx: &ValidationContext,
    ) -> Option<ErrorKind> {
        let value = values.get(&field);
        match field {
            SignUpField::Email => rules::pattern(value, &patterns::EMAIL),
            SignUpField::Username => rules::pattern(value, &patterns::USERNAME),
            SignUpField::Password => rules::password(value),
            SignUpField::ConfirmPassword => {
                rules::confirmation(value, values.get(&SignUpField::Password))
            }
            SignUpField::Patient(field) => {
                patient::check(field, |sibling| values.get(&Patient(sibling)), ctx)
            }
            SignUpField::AcceptTerms => rules::accepted(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldValue, StepOutcome};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn complete_values() -> ValueMap<SignUpField> {
        ValueMap::from([
            (SignUpField::Email, FieldValue::from("ada@example.com")),
            (SignUpField::Username, FieldValue::from("ada_l")),
            (SignUpField::Password, FieldValue::from("abc12345!")),
            (SignUpField::ConfirmPassword, FieldValue::from("abc12345!")),
            (Patient(PatientField::FirstName), FieldValue::from("Ada")),
            (Patient(PatientField::LastName), FieldValue::from("Lovelace")),
            (Patient(PatientField::BirthDate), FieldValue::from("1990-12-10")),
            (Patient(PatientField::PhoneNumber), FieldValue::from("514-555-0199")),
            (Patient(PatientField::Address), FieldValue::from("1 Rue Sherbrooke")),
            (Patient(PatientField::City), FieldValue::from("Montréal")),
            (Patient(PatientField::Country), FieldValue::from("CAN")),
            (Patient(PatientField::Province), FieldValue::from("QC")),
            (Patient(PatientField::PostalCode), FieldValue::from("H2X 1Y4")),
            (Patient(PatientField::MedicalId), FieldValue::from("LOVA 9012 1001")),
            (SignUpField::AcceptTerms, FieldValue::from(true)),
        ])
    }

    fn codes(values: &ValueMap<SignUpField>, fields: &[SignUpField]) -> Vec<String> {
        let errors = SignUp::validate(values, fields, &ctx());
        SignUpField::ALL
            .iter()
            .filter_map(|key| errors.get(key).map(ToString::to_string))
            .collect()
    }

    #[test]
    fn test_complete_values_pass() {
        assert!(SignUp::validate(&complete_values(), SignUpField::ALL, &ctx()).is_empty());
    }

    #[test]
    fn test_empty_account_step() {
        assert_eq!(
            codes(&ValueMap::new(), ACCOUNT),
            vec![
                "EMAIL_REQUIRED",
                "USERNAME_REQUIRED",
                "PASSWORD_REQUIRED",
                "CONFIRMPASSWORD_REQUIRED"
            ]
        );
    }

    #[test]
    fn test_weak_and_mismatched_password() {
        let mut values = complete_values();
        values.insert(SignUpField::Password, FieldValue::from("abc"));
        assert_eq!(
            codes(&values, ACCOUNT),
            vec!["PASSWORD_PATTERN", "CONFIRMPASSWORD_MISMATCH"]
        );
    }

    #[test]
    fn test_underage_patient() {
        let mut values = complete_values();
        values.insert(Patient(PatientField::BirthDate), FieldValue::from("2008-10-20"));
        assert_eq!(codes(&values, PERSONAL), vec!["BIRTHDATE_MINIMUM_AGE"]);
        values.remove(&Patient(PatientField::BirthDate));
        assert_eq!(codes(&values, PERSONAL), vec!["BIRTHDATE_REQUIRED"]);
    }

    #[test]
    fn test_postal_code_follows_country() {
        let mut values = complete_values();
        values.insert(Patient(PatientField::Country), FieldValue::from("USA"));
        assert_eq!(codes(&values, ADDRESS), vec!["POSTALCODE_PATTERN"]);
        values.insert(Patient(PatientField::PostalCode), FieldValue::from("90210"));
        assert!(codes(&values, ADDRESS).is_empty());
        values.insert(Patient(PatientField::Country), FieldValue::from("GBR"));
        values.insert(Patient(PatientField::PostalCode), FieldValue::from("SW1A 1AA"));
        assert!(codes(&values, ADDRESS).is_empty());
    }

    #[test]
    fn test_optional_measurements_checked_when_present() {
        let mut values = complete_values();
        values.insert(Patient(PatientField::Height), FieldValue::from("12"));
        values.insert(Patient(PatientField::Weight), FieldValue::from("heavy"));
        values.insert(SignUpField::AcceptTerms, FieldValue::from(false));
        assert_eq!(
            codes(&values, MEDICAL),
            vec!["HEIGHT_MINIMUM", "WEIGHT_PATTERN", "TERMS_REQUIRED"]
        );
    }

    #[test]
    fn test_walk_through_all_steps() {
        let ctx = ctx();
        let validate = |values: &ValueMap<SignUpField>, fields: &[SignUpField]| {
            SignUp::validate(values, fields, &ctx)
        };
        let mut form = SignUp::build(ValueMap::new()).unwrap();
        assert_eq!(form.stepper().len(), 4);
        assert_eq!(form.submit_step(validate), StepOutcome::Invalid);

        form.merge(complete_values());
        assert_eq!(form.submit_step(validate), StepOutcome::Advanced(1));
        assert_eq!(form.submit_step(validate), StepOutcome::Advanced(2));
        assert_eq!(form.submit_step(validate), StepOutcome::Advanced(3));
        assert_eq!(form.submit_step(validate), StepOutcome::Completed);
    }

    #[test]
    fn test_confirm_password_stays_client_side() {
        let client_only: Vec<_> = SignUpField::ALL
            .iter()
            .filter(|key| key.is_client_only())
            .collect();
        assert_eq!(client_only, vec![&SignUpField::ConfirmPassword]);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = SignUpField::ALL.iter().map(|key| key.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SignUpField::ALL.len());
    }
}
