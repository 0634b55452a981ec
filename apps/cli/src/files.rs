//! File adapter: validate, read, and write JSON string tables.
//!
//! The engine only ever sees an already-parsed map; everything filesystem-
//! or format-shaped lives here.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of the file adapter, presented on stderr with a non-zero exit.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0} is not a JSON file")]
    UnsupportedFileType(PathBuf),

    #[error("{0} does not exist")]
    FileNotFound(PathBuf),

    /// Position of the first syntax problem, as the parser reports it.
    #[error("invalid JSON in input at line {line}, column {column}: {message}")]
    InvalidInputFormat {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("failed to encode output JSON: {0}")]
    Serialize(serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Checks that `path` names an existing `.json` file.
pub fn validate_input_path(path: &Path) -> Result<(), CliError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(CliError::UnsupportedFileType(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Reads and parses a flat key → string table.
pub fn read_string_table(path: &Path) -> Result<HashMap<String, String>, CliError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| CliError::InvalidInputFormat {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

/// Writes the table with human-readable indentation. Keys are sorted so the
/// output file is stable across runs.
pub fn write_string_table(path: &Path, table: &HashMap<String, String>) -> Result<(), CliError> {
    let ordered: BTreeMap<&String, &String> = table.iter().collect();
    let pretty = serde_json::to_string_pretty(&ordered).map_err(CliError::Serialize)?;
    fs::write(path, pretty)?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
