//! The hash-indexed budget, the one realized storage strategy.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::errors::{BudgetError, Result};
use crate::utils::persistence;

use super::budget::Budget;
use super::entry::{EntryKey, EntryValue};
use super::validate;

/// Budget variant backed by an unordered hash index.
///
/// Point lookups and inserts are constant-time; key iteration carries no
/// ordering guarantee.
#[derive(Debug, Clone, Default)]
pub struct HashBudget {
    name: String,
    entries: HashMap<EntryKey, EntryValue>,
}

/// One element of the rendered form. `values` nests the single value
/// object in a one-element array.
#[derive(Serialize)]
struct RenderedEntry<'a> {
    key: &'a EntryKey,
    values: [RenderedValue<'a>; 1],
}

#[derive(Serialize)]
struct RenderedValue<'a> {
    description: &'a str,
    change: f64,
    total: f64,
}

impl<'a> From<&'a EntryValue> for RenderedValue<'a> {
    fn from(value: &'a EntryValue) -> Self {
        Self {
            description: &value.description,
            change: value.change,
            total: value.total,
        }
    }
}

impl HashBudget {
    /// Creates an empty budget identified by `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Creates a budget pre-populated with `entries`.
    pub fn with_entries(name: impl Into<String>, entries: HashMap<EntryKey, EntryValue>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Loads a budget back from a raw dump written by [`Budget::write`].
    ///
    /// Every stored pair passes through shape validation, so a malformed
    /// entry fails with [`BudgetError::InvalidEntry`] rather than a bare
    /// decoding error.
    pub fn read(name: impl Into<String>, path: &Path) -> Result<Self> {
        let mut budget = Self::new(name);
        for (key, value) in persistence::read_entries(path)? {
            budget.insert_raw(key, value)?;
        }
        tracing::debug!(
            path = %path.display(),
            entries = budget.entries.len(),
            "loaded budget dump"
        );
        Ok(budget)
    }
}

impl Budget for HashBudget {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &EntryKey) -> Result<EntryValue> {
        self.entries
            .get(key)
            .cloned()
            .ok_or(BudgetError::KeyNotFound(*key))
    }

    fn insert(&mut self, key: EntryKey, value: EntryValue) -> Result<()> {
        self.entries.insert(key, value);
        Ok(())
    }

    fn insert_raw(&mut self, key: Value, value: Value) -> Result<()> {
        match (validate::parse_key(&key), validate::parse_value(&value)) {
            (Some(parsed_key), Some(parsed_value)) => {
                self.entries.insert(parsed_key, parsed_value);
                Ok(())
            }
            _ => Err(BudgetError::InvalidEntry { key, value }),
        }
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }

    fn iter_keys(&self) -> Result<Box<dyn Iterator<Item = EntryKey> + '_>> {
        Ok(Box::new(self.entries.keys().copied()))
    }

    fn keys(&self) -> Result<Vec<EntryKey>> {
        Ok(self.entries.keys().copied().collect())
    }

    fn values(&self) -> Result<Vec<EntryValue>> {
        Ok(self.entries.values().cloned().collect())
    }

    fn entries(&self) -> Result<Vec<(EntryKey, EntryValue)>> {
        Ok(self
            .entries
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect())
    }

    fn render_json(&self) -> Result<String> {
        let rendered: Vec<RenderedEntry<'_>> = self
            .entries
            .iter()
            .map(|(key, value)| RenderedEntry {
                key,
                values: [RenderedValue::from(value)],
            })
            .collect();
        Ok(serde_json::to_string(&rendered)?)
    }

    fn write(&self, path: &Path) -> Result<()> {
        let mut pairs: Vec<(&EntryKey, &EntryValue)> = self.entries.iter().collect();
        pairs.sort_by_key(|(key, _)| **key);
        persistence::write_entries(path, &pairs)
    }
}

impl fmt::Display for HashBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render_json().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
