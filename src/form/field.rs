//! Field keys, values and error codes

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Current value of every field of a form
pub type ValueMap<K> = HashMap<K, FieldValue>;

/// Validation error per invalid field; empty when the form is valid
pub type ErrorMap<K> = HashMap<K, ErrorCode>;

/// How a field is edited and serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that is masked when rendered
    Secret,
    /// Text input holding a decimal number
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// On/off switch
    Toggle,
    /// One value out of a fixed list
    Choice(&'static [&'static str]),
}

/// Closed set of fields belonging to one form variant
pub trait FieldKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every field of the form in declaration order
    const ALL: &'static [Self];

    /// camelCase name used at the serialization boundary
    fn name(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;

    /// Prefix of the error codes emitted for this field (`EMAIL`, `BIRTHDATE`)
    fn code_prefix(&self) -> &'static str;

    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    /// Fields that only exist in the form and never leave it (e.g. a password confirmation)
    fn is_client_only(&self) -> bool {
        false
    }

    /// Look a field up by its camelCase name
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Whitespace-only text, zero, NaN and `false` all count as "not filled in"
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
            FieldValue::Bool(b) => !b,
        }
    }

    /// Numeric view of the value; text is parsed after trimming
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            other => !other.is_blank(),
        }
    }

    /// Get the display value for rendering and editing
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{n:.0}"),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(true) => "yes".to_string(),
            FieldValue::Bool(false) => "no".to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    Pattern,
    MinimumAge,
    Minimum,
    Mismatch,
    Past,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::Pattern => "PATTERN",
            Self::MinimumAge => "MINIMUM_AGE",
            Self::Minimum => "MINIMUM",
            Self::Mismatch => "MISMATCH",
            Self::Past => "PAST",
        }
    }

    /// Short sentence shown next to the field
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "is required",
            Self::Pattern => "has an invalid format",
            Self::MinimumAge => "is below the minimum age",
            Self::Minimum => "is below the minimum",
            Self::Mismatch => "does not match",
            Self::Past => "is in the past",
        }
    }
}

/// Error code such as `EMAIL_REQUIRED`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    prefix: &'static str,
    kind: ErrorKind,
}

impl ErrorCode {
    pub fn new(prefix: &'static str, kind: ErrorKind) -> Self {
        Self { prefix, kind }
    }

    pub fn for_field<K: FieldKey>(field: K, kind: ErrorKind) -> Self {
        Self::new(field.code_prefix(), kind)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix, self.kind.as_str())
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        other
            .strip_prefix(self.prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|kind| kind == self.kind.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Labels of every invalid field, in declaration order
pub fn invalid_labels<K: FieldKey>(errors: &ErrorMap<K>) -> Vec<&'static str> {
    K::ALL
        .iter()
        .filter(|key| errors.contains_key(key))
        .map(|key| key.label())
        .collect()
}
