//! Value map <-> mutation variables

use super::case::{camel_to_snake, snake_to_camel};
use crate::form::{FieldKey, FieldKind, FieldValue, ValueMap};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// What to send for a blank field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyFieldPolicy {
    /// Send the key with `null`, clearing the stored value
    #[default]
    Null,
    /// Leave the key out, keeping the stored value
    Omit,
}

fn to_json<K: FieldKey>(key: K, value: &FieldValue) -> Value {
    match key.kind() {
        FieldKind::Toggle => Value::Bool(value.as_bool()),
        FieldKind::Number => value
            .as_number()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.display())),
        _ => Value::String(value.display().trim().to_string()),
    }
}

/// Build the variables object of a mutation: snake_case keys, typed values.
///
/// Client-only fields are dropped. Toggles are always sent as booleans.
pub fn build_variables<K: FieldKey>(
    values: &ValueMap<K>,
    policy: EmptyFieldPolicy,
) -> Map<String, Value> {
    let mut variables = Map::new();
    for &key in K::ALL.iter().filter(|key| !key.is_client_only()) {
        let name = camel_to_snake(key.name());
        let value = values.get(&key);
        if key.kind() == FieldKind::Toggle {
            variables.insert(name, Value::Bool(value.is_some_and(FieldValue::as_bool)));
            continue;
        }
        match value.filter(|v| !v.is_blank()) {
            Some(value) => {
                variables.insert(name, to_json(key, value));
            }
            None if policy == EmptyFieldPolicy::Null => {
                variables.insert(name, Value::Null);
            }
            None => {}
        }
    }
    variables
}

/// Read a stored record (snake_case keys) back into a value map.
///
/// Keys that match no field, nulls and nested values are skipped.
pub fn values_from_record<K: FieldKey>(record: &Map<String, Value>) -> ValueMap<K> {
    record
        .iter()
        .filter_map(|(name, value)| {
            let key = K::from_name(&snake_to_camel(name))?;
            let value = match value {
                Value::Bool(b) => FieldValue::Bool(*b),
                Value::Number(n) => FieldValue::Number(n.as_f64()?),
                Value::String(s) => FieldValue::Text(s.clone()),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key, value))
        })
        .collect()
}
