use std::fmt::Display;

use serde_json::Value;

use crate::Entity;

/// A state token as used in the `locationDesc` field, e.g. `US-CA`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateFilter(String);

impl StateFilter {
    /// Wraps an already canonical token without normalizing it.
    #[must_use]
    pub fn exact(token: &str) -> Self {
        Self(token.to_string())
    }

    /// Normalizes user input into `US-XX` form. Returns `None` when no filter
    /// was given.
    ///
    /// Accepted inputs:
    ///   CA, ca        -> US-CA
    ///   us-ca, US-CA  -> US-CA
    ///   US_CA         -> US-CA
    /// Anything else is upper-cased and compared literally.
    #[must_use]
    pub fn normalize(input: Option<&str>) -> Option<Self> {
        let token = input?.trim().to_uppercase();
        if token.is_empty() {
            return None;
        }

        if token.starts_with("US-") {
            return Some(Self(token));
        }
        if token.chars().count() == 2 {
            return Some(Self(format!("US-{token}")));
        }
        if let Some(code) = token.strip_prefix("US_") {
            return Some(Self(format!("US-{code}")));
        }
        if let Some((country, code)) = token.split_once('-') {
            if country.chars().count() == 2 && code.chars().count() == 2 {
                return Some(Self(format!("{country}-{code}")));
            }
        }
        Some(Self(token))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against the entity's `locationDesc`.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        matches!(entity.get("locationDesc"), Some(Value::String(location)) if *location == self.0)
    }
}

impl Display for StateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps the entities matching `filter`, or all of them without a filter.
#[must_use]
pub fn filter_by_state<'a>(
    entities: &'a [Entity],
    filter: Option<&StateFilter>,
) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|entity| filter.is_none_or(|filter| filter.matches(entity)))
        .collect()
}
