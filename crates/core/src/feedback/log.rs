//! Bounded, newest-first feedback log

use serde::{Deserialize, Serialize};

use super::entry::FeedbackEntry;
use super::FeedbackError;

/// Upper bound on persisted entries
pub const MAX_ENTRIES: usize = 60;

/// Ordered sequence of entries, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries already ordered newest first
    pub fn from_entries(mut entries: Vec<FeedbackEntry>) -> Self {
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Strict decode of the persisted JSON array
    pub fn decode(raw: &str) -> Result<Self, FeedbackError> {
        serde_json::from_str(raw).map_err(FeedbackError::Malformed)
    }

    /// Fail-open decode: anything that is not a well-formed log is empty.
    ///
    /// This is the documented recovery path for foreign or corrupted data;
    /// it never surfaces an error to the caller.
    pub fn from_json(raw: &str) -> Self {
        match Self::decode(raw) {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed feedback log");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, FeedbackError> {
        serde_json::to_string(self).map_err(FeedbackError::Encode)
    }

    /// Put `entry` first, dropping the oldest entries beyond `limit`.
    ///
    /// `limit` is clamped to `1..=MAX_ENTRIES`.
    pub fn prepend(&mut self, entry: FeedbackEntry, limit: usize) {
        self.entries.insert(0, entry);
        self.entries.truncate(limit.clamp(1, MAX_ENTRIES));
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&FeedbackEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedbackEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FeedbackLog {
    type Item = &'a FeedbackEntry;
    type IntoIter = std::slice::Iter<'a, FeedbackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackForm;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(id: usize) -> FeedbackEntry {
        let form = FeedbackForm::parse(&format!("S{id}"), "7", None).unwrap();
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        FeedbackEntry::from_form(form, base + Duration::minutes(id as i64))
    }

    #[test]
    fn test_prepend_orders_newest_first() {
        let mut log = FeedbackLog::new();
        log.prepend(entry(1), MAX_ENTRIES);
        log.prepend(entry(2), MAX_ENTRIES);
        assert_eq!(log.newest().unwrap().student_id, "S2");
        assert_eq!(log.entries()[1].student_id, "S1");
    }

    #[test]
    fn test_prepend_drops_tail_at_capacity() {
        let mut log = FeedbackLog::from_entries((0..MAX_ENTRIES).rev().map(entry).collect());
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.entries().last().unwrap().student_id, "S0");

        log.prepend(entry(100), MAX_ENTRIES);
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.newest().unwrap().student_id, "S100");
        assert!(log.iter().all(|e| e.student_id != "S0"));
    }

    #[test]
    fn test_limit_is_clamped() {
        let mut log = FeedbackLog::new();
        for i in 0..5 {
            log.prepend(entry(i), 0);
        }
        assert_eq!(log.len(), 1);

        for i in 0..(MAX_ENTRIES + 10) {
            log.prepend(entry(i), 1000);
        }
        assert_eq!(log.len(), MAX_ENTRIES);
    }

    #[test]
    fn test_from_json_fails_open() {
        assert!(FeedbackLog::from_json("").is_empty());
        assert!(FeedbackLog::from_json("null").is_empty());
        assert!(FeedbackLog::from_json("{\"studentId\":1}").is_empty());
        assert!(FeedbackLog::from_json("[{\"nope\":true}]").is_empty());
        assert!(FeedbackLog::decode("[oops").is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let log = FeedbackLog::from_entries(vec![entry(3), entry(2), entry(1)]);
        let decoded = FeedbackLog::decode(&log.to_json().unwrap()).unwrap();
        assert_eq!(decoded, log);
    }
}
