//! Value and error bookkeeping for one logical form

use super::field::{invalid_labels, ErrorCode, ErrorMap, FieldKey, FieldValue, ValueMap};
use std::collections::HashSet;

/// Single source of truth for the values and validation errors of a form.
///
/// Errors are only recomputed by [`handle_submit`](Self::handle_submit); editing a
/// field keeps its previous error until the next submit attempt.
#[derive(Debug, Clone)]
pub struct FormStateController<K: FieldKey> {
    values: ValueMap<K>,
    errors: ErrorMap<K>,
    dirty: HashSet<K>,
}

impl<K: FieldKey> Default for FormStateController<K> {
    fn default() -> Self {
        Self::new(ValueMap::new())
    }
}

impl<K: FieldKey> FormStateController<K> {
    /// Seed the form, e.g. from an existing record
    pub fn new(initial_values: ValueMap<K>) -> Self {
        Self {
            values: initial_values,
            errors: ErrorMap::new(),
            dirty: HashSet::new(),
        }
    }

    /// Replace the value of one field
    pub fn handle_change(&mut self, key: K, value: impl Into<FieldValue>) {
        self.values.insert(key, value.into());
        self.dirty.insert(key);
    }

    /// Apply several changes at once
    pub fn merge(&mut self, partial: ValueMap<K>) {
        for (key, value) in partial {
            self.handle_change(key, value);
        }
    }

    /// Validate the current values and call `on_success` when nothing is invalid.
    ///
    /// The stored errors are replaced by the validator's result, never merged.
    /// Returns what `on_success` returned, or `None` when the form is invalid.
    pub fn handle_submit<V, F, R>(&mut self, validate: V, on_success: F) -> Option<R>
    where
        V: FnOnce(&ValueMap<K>) -> ErrorMap<K>,
        F: FnOnce() -> R,
    {
        self.errors = validate(&self.values);
        if self.errors.is_empty() {
            tracing::debug!("form valid, running completion");
            Some(on_success())
        } else {
            tracing::debug!(invalid = self.errors.len(), "form rejected");
            None
        }
    }

    /// Like [`handle_submit`](Self::handle_submit) for validators that can fail.
    ///
    /// A validator error is handed back untouched and the stored errors stay as they were.
    pub fn try_handle_submit<V, F, R, E>(
        &mut self,
        validate: V,
        on_success: F,
    ) -> Result<Option<R>, E>
    where
        V: FnOnce(&ValueMap<K>) -> Result<ErrorMap<K>, E>,
        F: FnOnce() -> R,
    {
        let errors = validate(&self.values)?;
        Ok(self.handle_submit(|_| errors, on_success))
    }

    pub fn values(&self) -> ValueMap<K> {
        self.values.clone()
    }

    pub fn errors(&self) -> ErrorMap<K> {
        self.errors.clone()
    }

    pub fn value(&self, key: K) -> Option<&FieldValue> {
        self.values.get(&key)
    }

    pub fn error(&self, key: K) -> Option<&ErrorCode> {
        self.errors.get(&key)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_dirty(&self, key: K) -> bool {
        self.dirty.contains(&key)
    }

    /// Fields changed since construction, in declaration order
    pub fn dirty_fields(&self) -> Vec<K> {
        K::ALL
            .iter()
            .copied()
            .filter(|key| self.dirty.contains(key))
            .collect()
    }

    /// Labels of the invalid fields, for a single aggregated notification
    pub fn invalid_labels(&self) -> Vec<&'static str> {
        invalid_labels(&self.errors)
    }
}
