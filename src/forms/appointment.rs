//! Booking an appointment with a doctor

use super::FormDefinition;
use crate::form::{ErrorKind, FieldKey, FieldKind, FormStep, StepMeta, ValueMap};
use crate::validation::{patterns, rules, ValidationContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentField {
    Doctor,
    Date,
    Time,
    Reason,
    Notes,
}

impl FieldKey for AppointmentField {
    const ALL: &'static [Self] = &[
        Self::Doctor,
        Self::Date,
        Self::Time,
        Self::Reason,
        Self::Notes,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Doctor => "doctorId",
            Self::Date => "date",
            Self::Time => "time",
            Self::Reason => "reason",
            Self::Notes => "notes",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Doctor => "Doctor ID",
            Self::Date => "Date (YYYY-MM-DD)",
            Self::Time => "Time (HH:MM)",
            Self::Reason => "Reason for the visit",
            Self::Notes => "Notes",
        }
    }

    fn code_prefix(&self) -> &'static str {
        match self {
            Self::Doctor => "DOCTOR",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Reason => "REASON",
            Self::Notes => "NOTES",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Date => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

const NAMESPACE: &str = "appointment";

/// Appointment creation form
pub struct Appointment;

impl FormDefinition for Appointment {
    type Field = AppointmentField;

    const OPERATION: &'static str = "createAppointment";
    const TITLE: &'static str = "Book an appointment";

    fn steps() -> Vec<FormStep<AppointmentField>> {
        vec![
            FormStep {
                meta: StepMeta {
                    icon: "calendar",
                    key: "steps.slot",
                    namespace: NAMESPACE,
                },
                fields: &[
                    AppointmentField::Doctor,
                    AppointmentField::Date,
                    AppointmentField::Time,
                ],
            },
            FormStep {
                meta: StepMeta {
                    icon: "notes",
                    key: "steps.details",
                    namespace: NAMESPACE,
                },
                fields: &[AppointmentField::Reason, AppointmentField::Notes],
            },
        ]
    }

    fn check(
        field: AppointmentField,
        values: &ValueMap<AppointmentField>,
        ctx: &ValidationContext,
    ) -> Option<ErrorKind> {
        let value = values.get(&field);
        match field {
            AppointmentField::Doctor | AppointmentField::Reason => rules::required(value),
            AppointmentField::Date => rules::not_in_past(value, ctx),
            AppointmentField::Time => rules::pattern(value, &patterns::TIME_OF_DAY),
            AppointmentField::Notes => None,
        }
    }
}
