use serde_json::Value;

use crate::Entity;

/// How the `activations` field of an entity was interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activations {
    /// Field absent, null or an empty string.
    Missing,
    Count(i64),
    /// Field present but not an integer, e.g. placeholder text.
    Invalid,
}

impl Activations {
    #[must_use]
    pub fn count(self) -> i64 {
        match self {
            Self::Count(count) => count,
            Self::Missing | Self::Invalid => 0,
        }
    }
}

#[must_use]
pub fn coerce_activations(value: Option<&Value>) -> Activations {
    match value {
        None | Some(Value::Null) => Activations::Missing,
        Some(Value::String(s)) if s.is_empty() => Activations::Missing,
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_or(Activations::Invalid, Activations::Count),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(count), _) => Activations::Count(count),
            // truncates toward zero
            (None, Some(f)) if n.is_f64() && f.abs() < i64::MAX as f64 => {
                Activations::Count(f as i64)
            }
            _ => Activations::Invalid,
        },
        Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => Activations::Invalid,
    }
}

/// Activation count of an entity. Never fails: anything that is not an
/// integer counts as zero.
#[must_use]
pub fn activation_count(entity: &Entity) -> i64 {
    coerce_activations(entity.get("activations")).count()
}

#[must_use]
pub fn is_zero_activation(entity: &Entity) -> bool {
    activation_count(entity) == 0
}
