use std::borrow::Cow;

use serde_json::{Map, Value};

pub mod activations;
pub mod coordinates;
pub mod entities;
pub mod features;
pub mod output;
pub mod ranking;
pub mod state;
pub mod zero;

/// A single POTA entity as found in the source list. No schema is enforced,
/// fields are read on demand by the individual reports.
pub type Entity = Map<String, Value>;

/// Renders a field for console output, falling back to `default` when the
/// field is missing or null.
#[must_use]
pub fn entity_field<'a>(entity: &'a Entity, key: &str, default: &'a str) -> Cow<'a, str> {
    match entity.get(key) {
        None | Some(Value::Null) => Cow::Borrowed(default),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
pub(crate) fn entity(value: &Value) -> Entity {
    value.as_object().cloned().unwrap()
}
