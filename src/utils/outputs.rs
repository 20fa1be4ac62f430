// src/utils/outputs.rs

//! CI output signaling.
//!
//! Operations report machine-readable results as `key=value` lines appended
//! to the file named by the `GITHUB_OUTPUT` environment variable, the
//! channel downstream workflow steps branch on.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Environment variable naming the CI output file.
const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Append a `key=value` line to the CI output file, if one is designated.
///
/// Outside CI (variable unset or empty) this is a no-op. An append failure
/// is logged as a warning and does not fail the operation that produced
/// the value.
pub fn set_output(key: &str, value: &str) {
    match env::var(OUTPUT_ENV) {
        Ok(path) if !path.is_empty() => {
            if let Err(e) = append_line(Path::new(&path), key, value) {
                log::warn!("Failed to record output {key} in {path}: {e}");
            }
        }
        _ => {}
    }
}

fn append_line(path: &Path, key: &str, value: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{key}={value}")
}
