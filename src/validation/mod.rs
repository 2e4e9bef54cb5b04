//! Field validation
//!
//! Validators are pure functions of a value map. Anything time dependent reads
//! "today" from a [`ValidationContext`] so results are reproducible in tests.

pub mod patterns;
pub mod rules;

use crate::form::{ErrorCode, ErrorKind, ErrorMap, FieldKey, ValueMap};
use chrono::{Local, NaiveDate};

/// Age patients must have reached to register
pub const DEFAULT_MINIMUM_AGE: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
    pub minimum_age: u32,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }

    /// Context anchored on the local calendar date
    pub fn now() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_minimum_age(mut self, years: u32) -> Self {
        self.minimum_age = years;
        self
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::now()
    }
}

/// Run `check` on every field of `fields` and collect the failures
pub fn validate_fields<K, C>(values: &ValueMap<K>, fields: &[K], check: C) -> ErrorMap<K>
where
    K: FieldKey,
    C: Fn(K, &ValueMap<K>) -> Option<ErrorKind>,
{
    fields
        .iter()
        .filter_map(|&key| {
            check(key, values).map(|kind| (key, ErrorCode::for_field(key, kind)))
        })
        .collect()
}
