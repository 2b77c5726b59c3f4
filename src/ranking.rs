use std::fmt::Display;

use itertools::Itertools as _;

use crate::{
    activations::{coerce_activations, Activations},
    entity_field,
    state::{filter_by_state, StateFilter},
    Entity,
};

pub const DEFAULT_LIMIT: usize = 20;

/// Entities of one state with the fewest activations, ascending by count.
#[derive(Clone, Debug)]
pub struct Ranking<'a> {
    pub state: StateFilter,
    /// Number of entities in the state before truncating to the limit.
    pub matched: usize,
    pub entries: Vec<(i64, &'a Entity)>,
}

/// Ranks the entities located in `state` by activation count. Ties keep
/// their input order.
#[must_use]
pub fn least_activated<'a>(
    entities: &'a [Entity],
    state: &StateFilter,
    limit: usize,
) -> Ranking<'a> {
    let in_state = filter_by_state(entities, Some(state));
    let mut invalid_activations = 0;
    let counted = in_state
        .iter()
        .map(|entity| {
            let activations = coerce_activations(entity.get("activations"));
            if activations == Activations::Invalid {
                invalid_activations += 1;
            }
            (activations.count(), *entity)
        })
        .collect_vec();

    if invalid_activations > 0 {
        tracing::warn!("{invalid_activations} entities in {state} have non-numeric activations, counted as zero");
    }

    Ranking {
        state: state.clone(),
        matched: in_state.len(),
        entries: counted
            .into_iter()
            .sorted_by_key(|(count, _)| *count)
            .take(limit)
            .collect(),
    }
}

impl Display for Ranking<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Found {} parks in {}.", self.matched, self.state)?;
        writeln!(
            f,
            "Showing {} with the fewest activations:",
            self.entries.len()
        )?;
        writeln!(f)?;
        for (count, entity) in &self.entries {
            writeln!(
                f,
                "{}\t{count}\t{}",
                entity_field(entity, "reference", "UNKNOWN"),
                entity_field(entity, "name", "Unnamed"),
            )?;
        }

        Ok(())
    }
}
