//! Read-modify-write of the persisted feedback log

use chrono::{DateTime, Utc};

use super::entry::{FeedbackEntry, FeedbackForm};
use super::log::{FeedbackLog, MAX_ENTRIES};
use super::FeedbackError;
use crate::config::{PageConfig, COMMENTS_KEY};
use crate::store::KeyValueStore;

/// Feedback log bound to a store
///
/// Reads are fail-open and writes are best-effort: neither reports an error
/// to the page. Two tabs submitting at once race, and the last writer wins.
pub struct FeedbackBoard<S> {
    store: S,
    key: String,
    limit: usize,
}

impl<S: KeyValueStore> FeedbackBoard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: COMMENTS_KEY.to_string(),
            limit: MAX_ENTRIES,
        }
    }

    pub fn with_config(store: S, config: &PageConfig) -> Self {
        Self {
            store,
            key: config.comments_key.clone(),
            limit: config.max_comments.clamp(1, MAX_ENTRIES),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Current log; absent, malformed or unreadable storage yields an empty log
    pub fn load_log(&self) -> FeedbackLog {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => FeedbackLog::from_json(&raw),
            Ok(None) => FeedbackLog::new(),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Feedback storage unreadable");
                FeedbackLog::new()
            }
        }
    }

    /// Record a submission stamped with the current time
    pub fn submit(&self, form: FeedbackForm) -> FeedbackLog {
        self.submit_at(form, Utc::now())
    }

    /// Record a submission, returning the log as it now stands.
    ///
    /// A failed write is logged and otherwise ignored; the returned log still
    /// includes the new entry.
    pub fn submit_at(&self, form: FeedbackForm, now: DateTime<Utc>) -> FeedbackLog {
        let mut log = self.load_log();
        log.prepend(FeedbackEntry::from_form(form, now), self.limit);

        if let Err(e) = self.persist(&log) {
            tracing::warn!(error = %e, key = %self.key, "Feedback not persisted");
        }
        tracing::debug!(count = log.len(), "Feedback submitted");
        log
    }

    fn persist(&self, log: &FeedbackLog) -> Result<(), FeedbackError> {
        let json = log.to_json()?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }
}
