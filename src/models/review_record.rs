//! Per-item scheduling state, keyed by item id.
use super::ease::MAX_EASE;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Always in `0..=MAX_EASE`
    pub ease: u8,
    /// Next review day, serialized as `YYYY-MM-DD`
    pub due: NaiveDate,
}

impl ReviewRecord {
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.due <= today
    }
}

/// Mapping from item id to its review record. A missing id means "never reviewed".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewStore(BTreeMap<String, ReviewRecord>);

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: &str) -> Option<&ReviewRecord> {
        self.0.get(item_id)
    }

    pub fn insert(&mut self, item_id: impl Into<String>, record: ReviewRecord) {
        self.0.insert(item_id.into(), record);
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.0.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ReviewRecord)> {
        self.0.iter()
    }

    /// Number of records due on or before `today`.
    pub fn due_count(&self, today: NaiveDate) -> usize {
        self.0.values().filter(|r| r.is_due(today)).count()
    }

    /// Returns the id of the first record whose ease is out of range, if any.
    pub fn find_out_of_range(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, r)| r.ease > MAX_EASE)
            .map(|(id, _)| id.as_str())
    }
}

impl FromIterator<(String, ReviewRecord)> for ReviewStore {
    fn from_iter<I: IntoIterator<Item = (String, ReviewRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
