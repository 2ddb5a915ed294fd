//! Time-ordered budget variants.
//!
//! Both are declared storage strategies whose backing indexes have not
//! been built yet: every operation besides [`Budget::name`] reports
//! [`BudgetError::Unimplemented`]. Filling one in means choosing an
//! ordered index keyed by [`EntryKey`] (a `BTreeMap` fits) so that
//! chronological iteration falls out of the index and range scans stay
//! sub-linear, while keeping the entry shapes and JSON forms of the hash
//! variant.

use std::path::Path;

use serde_json::Value;

use crate::errors::{BudgetError, Result};

use super::budget::Budget;
use super::entry::{EntryKey, EntryValue};

const TIME_INDEX_LABEL: &str = "TimeIndexBudget";
const TIME_RANGE_LABEL: &str = "TimeRangeBudget";

/// Budget variant intended to serve point lookups through a dedicated
/// time-keyed index.
#[derive(Debug, Clone)]
pub struct TimeIndexBudget {
    name: String,
}

impl TimeIndexBudget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Budget for TimeIndexBudget {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, _key: &EntryKey) -> Result<EntryValue> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn insert(&mut self, _key: EntryKey, _value: EntryValue) -> Result<()> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn insert_raw(&mut self, _key: Value, _value: Value) -> Result<()> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn len(&self) -> Result<usize> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn iter_keys(&self) -> Result<Box<dyn Iterator<Item = EntryKey> + '_>> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn keys(&self) -> Result<Vec<EntryKey>> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn values(&self) -> Result<Vec<EntryValue>> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn entries(&self) -> Result<Vec<(EntryKey, EntryValue)>> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn render_json(&self) -> Result<String> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }

    fn write(&self, _path: &Path) -> Result<()> {
        Err(BudgetError::Unimplemented(TIME_INDEX_LABEL))
    }
}

/// Budget variant intended to serve range queries ("everything in March")
/// through an ordered index.
#[derive(Debug, Clone)]
pub struct TimeRangeBudget {
    name: String,
}

impl TimeRangeBudget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Budget for TimeRangeBudget {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, _key: &EntryKey) -> Result<EntryValue> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn insert(&mut self, _key: EntryKey, _value: EntryValue) -> Result<()> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn insert_raw(&mut self, _key: Value, _value: Value) -> Result<()> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn len(&self) -> Result<usize> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn iter_keys(&self) -> Result<Box<dyn Iterator<Item = EntryKey> + '_>> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn keys(&self) -> Result<Vec<EntryKey>> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn values(&self) -> Result<Vec<EntryValue>> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn entries(&self) -> Result<Vec<(EntryKey, EntryValue)>> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn render_json(&self) -> Result<String> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }

    fn write(&self, _path: &Path) -> Result<()> {
        Err(BudgetError::Unimplemented(TIME_RANGE_LABEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn time_index_stub_keeps_its_name_but_fails_operations() {
        let mut budget = TimeIndexBudget::new("by-time");
        assert_eq!(budget.name(), "by-time");

        let key = EntryKey::from_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 0);
        assert!(matches!(
            budget.get(&key).unwrap_err(),
            BudgetError::Unimplemented("TimeIndexBudget")
        ));
        assert!(matches!(
            budget
                .insert(key, EntryValue::new("rent", -800.0, 400.0))
                .unwrap_err(),
            BudgetError::Unimplemented(_)
        ));
        assert!(budget.len().is_err());
        assert!(budget.render_json().is_err());
    }

    #[test]
    fn range_stub_fails_operations() {
        let budget = TimeRangeBudget::new("by-range");
        assert_eq!(budget.name(), "by-range");
        assert!(matches!(
            budget.keys().unwrap_err(),
            BudgetError::Unimplemented("TimeRangeBudget")
        ));
        assert!(budget.entries().is_err());
        assert!(budget.write_default().is_err());
    }
}
