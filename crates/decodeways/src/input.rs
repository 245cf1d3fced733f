//! Reading the digit string from disk.

use std::path::Path;

use anyhow::{Context, Result};

/// Read the whole file into memory.
///
/// With `trim`, trailing ASCII whitespace is dropped so a file saved with a
/// final newline still counts.
pub fn read_input(path: &Path, trim: bool) -> Result<Vec<u8>> {
    let mut bytes =
        std::fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))?;
    if trim {
        let keep = bytes.trim_ascii_end().len();
        bytes.truncate(keep);
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "input loaded");
    Ok(bytes)
}
