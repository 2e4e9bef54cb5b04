//! Patient details shared by sign-up and profile editing

use crate::form::{ErrorKind, FieldKey, FieldKind, FieldValue, StepMeta};
use crate::validation::rules::{self, MIN_HEIGHT_CM, MIN_WEIGHT_KG};
use crate::validation::{patterns, ValidationContext};

/// Country codes offered by the address step
pub const COUNTRIES: &[&str] = &["CAN", "USA", "MEX", "FRA", "GBR"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    FirstName,
    LastName,
    BirthDate,
    PhoneNumber,
    PhoneExtension,
    Address,
    City,
    Country,
    Province,
    PostalCode,
    MedicalId,
    Height,
    Weight,
}

impl FieldKey for PatientField {
    const ALL: &'static [Self] = &[
        Self::FirstName,
        Self::LastName,
        Self::BirthDate,
        Self::PhoneNumber,
        Self::PhoneExtension,
        Self::Address,
        Self::City,
        Self::Country,
        Self::Province,
        Self::PostalCode,
        Self::MedicalId,
        Self::Height,
        Self::Weight,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::BirthDate => "birthDate",
            Self::PhoneNumber => "phoneNumber",
            Self::PhoneExtension => "phoneExtension",
            Self::Address => "address",
            Self::City => "city",
            Self::Country => "country",
            Self::Province => "province",
            Self::PostalCode => "postalCode",
            Self::MedicalId => "medicalId",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::BirthDate => "Birth date (YYYY-MM-DD)",
            Self::PhoneNumber => "Phone number",
            Self::PhoneExtension => "Extension",
            Self::Address => "Address",
            Self::City => "City",
            Self::Country => "Country",
            Self::Province => "Province / State",
            Self::PostalCode => "Postal code",
            Self::MedicalId => "Medical ID",
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
        }
    }

    fn code_prefix(&self) -> &'static str {
        match self {
            Self::FirstName => "FIRSTNAME",
            Self::LastName => "LASTNAME",
            Self::BirthDate => "BIRTHDATE",
            Self::PhoneNumber => "PHONENUMBER",
            Self::PhoneExtension => "PHONEEXTENSION",
            Self::Address => "ADDRESS",
            Self::City => "CITY",
            Self::Country => "COUNTRY",
            Self::Province => "PROVINCE",
            Self::PostalCode => "POSTALCODE",
            Self::MedicalId => "MEDICALID",
            Self::Height => "HEIGHT",
            Self::Weight => "WEIGHT",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::BirthDate => FieldKind::Date,
            Self::Country => FieldKind::Choice(COUNTRIES),
            Self::Height | Self::Weight => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }
}

pub(crate) const PERSONAL: &[PatientField] = &[
    PatientField::FirstName,
    PatientField::LastName,
    PatientField::BirthDate,
    PatientField::PhoneNumber,
    PatientField::PhoneExtension,
];

pub(crate) const ADDRESS: &[PatientField] = &[
    PatientField::Address,
    PatientField::City,
    PatientField::Country,
    PatientField::Province,
    PatientField::PostalCode,
];

pub(crate) const MEDICAL: &[PatientField] = &[
    PatientField::MedicalId,
    PatientField::Height,
    PatientField::Weight,
];

pub(crate) fn personal_meta(namespace: &'static str) -> StepMeta {
    StepMeta {
        icon: "id-card",
        key: "steps.personal",
        namespace,
    }
}

pub(crate) fn address_meta(namespace: &'static str) -> StepMeta {
    StepMeta {
        icon: "home",
        key: "steps.address",
        namespace,
    }
}

pub(crate) fn medical_meta(namespace: &'static str) -> StepMeta {
    StepMeta {
        icon: "heart-pulse",
        key: "steps.medical",
        namespace,
    }
}

/// Rule for one patient field; `lookup` reads sibling values from whichever form hosts them
pub(crate) fn check<'a>(
    field: PatientField,
    lookup: impl Fn(PatientField) -> Option<&'a FieldValue>,
    ctx: &ValidationContext,
) -> Option<ErrorKind> {
    let value = lookup(field);
    match field {
        PatientField::FirstName | PatientField::LastName => rules::pattern(value, &patterns::NAME),
        PatientField::BirthDate => rules::minimum_age(value, ctx),
        PatientField::PhoneNumber => rules::pattern(value, &patterns::PHONE_NUMBER),
        PatientField::PhoneExtension => {
            rules::optional_pattern(value, &patterns::PHONE_EXTENSION)
        }
        PatientField::Address
        | PatientField::City
        | PatientField::Country
        | PatientField::Province => rules::required(value),
        PatientField::PostalCode => rules::postal_code(value, lookup(PatientField::Country)),
        PatientField::MedicalId => rules::pattern(value, &patterns::MEDICAL_ID),
        PatientField::Height => rules::optional_minimum(value, MIN_HEIGHT_CM),
        PatientField::Weight => rules::optional_minimum(value, MIN_WEIGHT_KG),
    }
}
