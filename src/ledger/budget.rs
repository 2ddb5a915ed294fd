use std::path::Path;

use serde_json::Value;

use crate::errors::Result;

use super::entry::{EntryKey, EntryValue};

/// Default target for [`Budget::write_default`].
pub const DEFAULT_WRITE_PATH: &str = "budget.json";

/// Contract shared by every budget storage strategy.
///
/// Variants differ only in how entries are indexed internally; the
/// observable operations are identical apart from iteration order and
/// performance profile. Every storage-touching operation is fallible so
/// a variant whose index has not been realized yet can report
/// [`crate::errors::BudgetError::Unimplemented`] from any of them.
pub trait Budget {
    /// Short identifying label for the budget.
    fn name(&self) -> &str;

    /// Looks up the entry stored under `key`.
    fn get(&self, key: &EntryKey) -> Result<EntryValue>;

    /// Inserts an entry, overwriting any previous value under the same key.
    fn insert(&mut self, key: EntryKey, value: EntryValue) -> Result<()>;

    /// Inserts an entry arriving as untyped JSON, validating its shape
    /// first. Rejection leaves the budget untouched.
    fn insert_raw(&mut self, key: Value, value: Value) -> Result<()>;

    /// Number of stored entries.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Lazily iterates over stored keys. Order is implementation-defined:
    /// unordered under hash indexing, chronological under a time-ordered
    /// index.
    fn iter_keys(&self) -> Result<Box<dyn Iterator<Item = EntryKey> + '_>>;

    /// Snapshot of stored keys.
    fn keys(&self) -> Result<Vec<EntryKey>>;

    /// Snapshot of stored values.
    fn values(&self) -> Result<Vec<EntryValue>>;

    /// Snapshot of stored key-value pairs.
    fn entries(&self) -> Result<Vec<(EntryKey, EntryValue)>>;

    /// Renders the budget as a JSON array with one object per entry:
    /// `{"key": [timestamp, seqno], "values": [{"description": ...,
    /// "change": ..., "total": ...}]}`.
    ///
    /// `values` is always a singleton array; consumers of the historical
    /// format rely on the nesting.
    fn render_json(&self) -> Result<String>;

    /// Dumps the raw key-to-value mapping to `path` as JSON.
    ///
    /// A different shape from [`Budget::render_json`]: entries appear as
    /// bare `[key, value]` pairs with no field names. Both shapes are
    /// long-standing and preserved as-is. The dump is a single blocking
    /// write with no staging file, so a crash mid-write can leave a
    /// partial document.
    fn write(&self, path: &Path) -> Result<()>;

    /// Dumps the raw mapping to [`DEFAULT_WRITE_PATH`].
    fn write_default(&self) -> Result<()> {
        self.write(Path::new(DEFAULT_WRITE_PATH))
    }
}
