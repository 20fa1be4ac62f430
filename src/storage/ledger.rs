// src/storage/ledger.rs

//! YAML ledger persistence.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, Result};

/// Load a ledger file into typed records.
///
/// A missing file and a file whose top level is not a YAML sequence both
/// read as an empty ledger. A sequence whose entries do not fit `T`
/// (missing keys, malformed dates, unknown kinds) is a data-integrity
/// error naming the file: ledgers are machine-written, so a bad entry
/// means the file was corrupted outside these tools.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let doc: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| malformed(path, &e))?;
    if !doc.is_sequence() {
        return Ok(Vec::new());
    }
    serde_yaml::from_value(doc).map_err(|e| malformed(path, &e))
}

/// Serialize the full record list to `path`, creating parent directories
/// as needed.
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_yaml::to_string(records)?;
    fs::write(path, content)?;
    Ok(())
}

fn malformed(path: &Path, error: &serde_yaml::Error) -> AppError {
    AppError::integrity(format!("Malformed ledger {}: {error}", path.display()))
}
