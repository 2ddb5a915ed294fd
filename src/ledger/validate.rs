//! Shape checks for entries arriving as untyped JSON.
//!
//! The typed API makes malformed entries unrepresentable, so these checks
//! only run on the import boundary, where a key or value of the wrong
//! arity can still show up.

use chrono::NaiveDateTime;
use serde_json::Value;

use super::entry::{EntryKey, EntryValue};

/// Returns true when `raw` is a JSON array.
pub fn is_array(raw: &Value) -> bool {
    raw.is_array()
}

/// Returns true when `raw` is an array of exactly `expected` elements.
pub fn has_len(raw: &Value, expected: usize) -> bool {
    raw.as_array().map_or(false, |items| items.len() == expected)
}

/// Parses a candidate key `[timestamp, seqno]`, rejecting wrong arity or
/// element types.
pub fn parse_key(raw: &Value) -> Option<EntryKey> {
    if !has_len(raw, 2) {
        return None;
    }
    let items = raw.as_array()?;
    let timestamp: NaiveDateTime = serde_json::from_value(items[0].clone()).ok()?;
    let seqno = u32::try_from(items[1].as_u64()?).ok()?;
    Some(EntryKey::new(timestamp, seqno))
}

/// Parses a candidate value `[description, change, total]`, rejecting
/// wrong arity or element types.
pub fn parse_value(raw: &Value) -> Option<EntryValue> {
    if !has_len(raw, 3) {
        return None;
    }
    let items = raw.as_array()?;
    let description = items[0].as_str()?;
    let change = items[1].as_f64()?;
    let total = items[2].as_f64()?;
    Some(EntryValue::new(description, change, total))
}
