use std::{fmt::Display, path::Path};

use crate::{
    activations::{coerce_activations, Activations},
    entity_field,
    output::{write_json, OutputResult},
    Entity,
};

/// Entities without any activation, in input order.
#[derive(Clone, Debug)]
pub struct ZeroActivationReport<'a> {
    pub total: usize,
    pub zero: Vec<&'a Entity>,
    /// Entities whose `activations` held something other than an integer.
    pub invalid_activations: usize,
}

impl<'a> ZeroActivationReport<'a> {
    #[must_use]
    pub fn from_entities(entities: &'a [Entity]) -> Self {
        let mut invalid_activations = 0;
        let zero = entities
            .iter()
            .filter(|entity| {
                let activations = coerce_activations(entity.get("activations"));
                if activations == Activations::Invalid {
                    invalid_activations += 1;
                }
                activations.count() == 0
            })
            .collect();

        if invalid_activations > 0 {
            tracing::warn!(
                "{invalid_activations} entities have non-numeric activations, counted as zero"
            );
        }

        Self {
            total: entities.len(),
            zero,
            invalid_activations,
        }
    }

    /// Writes the zero activation entities as a JSON array, even if empty.
    pub fn write(&self, path: &Path, indent: usize) -> OutputResult {
        write_json(path, &self.zero, indent)
    }
}

impl Display for ZeroActivationReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total entities: {}", self.total)?;
        writeln!(f, "Entities with zero activations: {}", self.zero.len())?;
        writeln!(f)?;
        for entity in &self.zero {
            writeln!(
                f,
                "{}\t{}\t{}",
                entity_field(entity, "reference", "UNKNOWN"),
                entity_field(entity, "name", "Unnamed"),
                entity_field(entity, "locationDesc", ""),
            )?;
        }

        Ok(())
    }
}
