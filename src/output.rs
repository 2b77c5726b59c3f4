use std::{io, path::Path};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output file: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type OutputResult = Result<(), OutputError>;

/// Serializes `value` with `indent` spaces per level. Non-ASCII text is kept
/// as is.
pub fn to_writer_indented<W: io::Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    indent: usize,
) -> Result<(), serde_json::Error> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

/// Writes `value` as JSON to `path`, creating missing parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, indent: usize) -> OutputResult {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let mut contents = Vec::new();
    to_writer_indented(&mut contents, value, indent)?;
    fs_err::write(path, contents)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
