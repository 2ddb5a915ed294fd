//! Typed records for the ledger's key and value tuples.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identifies a transaction by timestamp and intra-day sequence number.
///
/// Ordering is chronological, with the sequence number breaking ties
/// within a day. On the wire this stays the historical 2-tuple
/// `[timestamp, seqno]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(NaiveDateTime, u32)", into = "(NaiveDateTime, u32)")]
pub struct EntryKey {
    pub timestamp: NaiveDateTime,
    pub seqno: u32,
}

impl EntryKey {
    pub fn new(timestamp: NaiveDateTime, seqno: u32) -> Self {
        Self { timestamp, seqno }
    }

    /// Key for a date-resolution transaction, anchored at midnight.
    pub fn from_date(date: NaiveDate, seqno: u32) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), seqno)
    }
}

impl From<(NaiveDateTime, u32)> for EntryKey {
    fn from((timestamp, seqno): (NaiveDateTime, u32)) -> Self {
        Self { timestamp, seqno }
    }
}

impl From<EntryKey> for (NaiveDateTime, u32) {
    fn from(key: EntryKey) -> Self {
        (key.timestamp, key.seqno)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.timestamp, self.seqno)
    }
}

/// Describes a transaction's effect: a free-text description, the signed
/// delta it applies, and the running balance after it applies.
///
/// The balance is stored as given; the container never checks it against
/// neighboring entries. Wire shape is the historical 3-tuple
/// `[description, change, total]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64, f64)", into = "(String, f64, f64)")]
pub struct EntryValue {
    pub description: String,
    pub change: f64,
    pub total: f64,
}

impl EntryValue {
    pub fn new(description: impl Into<String>, change: f64, total: f64) -> Self {
        Self {
            description: description.into(),
            change,
            total,
        }
    }
}

impl From<(String, f64, f64)> for EntryValue {
    fn from((description, change, total): (String, f64, f64)) -> Self {
        Self {
            description,
            change,
            total,
        }
    }
}

impl From<EntryValue> for (String, f64, f64) {
    fn from(value: EntryValue) -> Self {
        (value.description, value.change, value.total)
    }
}
