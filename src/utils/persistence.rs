use std::{fs, path::Path};

use serde_json::Value;

use crate::errors::Result;
use crate::ledger::{EntryKey, EntryValue};

/// Writes raw key-to-value pairs to disk as a single JSON document.
///
/// Entry keys are tuples, which JSON objects cannot key on, so the
/// mapping is encoded as an array of `[key, value]` pairs. One blocking
/// write call, no staging file.
pub fn write_entries(path: &Path, pairs: &[(&EntryKey, &EntryValue)]) -> Result<()> {
    let json = serde_json::to_string(pairs)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), entries = pairs.len(), "wrote budget dump");
    Ok(())
}

/// Reads a raw dump back as untyped JSON pairs, leaving shape validation
/// to the caller.
pub fn read_entries(path: &Path) -> Result<Vec<(Value, Value)>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
