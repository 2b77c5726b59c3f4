use std::{io, path::Path};

use serde_json::Value;
use thiserror::Error;

use crate::Entity;

#[derive(Error, Debug)]
pub enum EntitiesError {
    #[error("failed to read entities file: {0}")]
    FileRead(#[from] io::Error),
    #[error("failed to deserialize entities file: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("expected top-level JSON array of entities, found {0}")]
    NotAnArray(&'static str),
    #[error("expected entity #{0} to be a JSON object, found {1}")]
    NotAnObject(usize, &'static str),
}

pub type EntitiesResult = Result<Vec<Entity>, EntitiesError>;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses a JSON document holding an array of entity objects, keeping file order.
pub fn parse_entities(content: &[u8]) -> EntitiesResult {
    match serde_json::from_slice(content)? {
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::Object(entity) => Ok(entity),
                other => Err(EntitiesError::NotAnObject(i, kind(&other))),
            })
            .collect(),
        other => Err(EntitiesError::NotAnArray(kind(&other))),
    }
}

pub fn load_entities(path: &Path) -> EntitiesResult {
    let entities = parse_entities(&fs_err::read(path)?)?;
    tracing::debug!("loaded {} entities from {}", entities.len(), path.display());
    Ok(entities)
}
