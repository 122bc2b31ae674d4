//! End-to-end behaviour of the comment widget against in-memory storage

use chrono::{Duration, TimeZone, Utc};
use portfolio_core::feedback::{FeedbackLog, MAX_ENTRIES, NO_COMMENT_PLACEHOLDER};
use portfolio_core::{
    CommentsView, FeedbackBoard, FeedbackForm, KeyValueStore, MemoryStore, StoreError,
};

/// Store whose backend is gone (private browsing, quota, disabled storage)
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disabled".into()))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::WriteRejected {
            key: key.into(),
            reason: "quota".into(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disabled".into()))
    }
}

fn form(id: &str, rating: &str, comment: &str) -> FeedbackForm {
    FeedbackForm::parse(id, rating, Some(comment)).expect("valid form")
}

fn fill(board: &FeedbackBoard<MemoryStore>, n: usize) {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    for i in 0..n {
        board.submit_at(form(&format!("S{i}"), "5", "ok"), base + Duration::seconds(i as i64));
    }
}

#[test]
fn submit_prepends_and_grows_until_capacity() {
    let board = FeedbackBoard::new(MemoryStore::new());

    for n in 0..MAX_ENTRIES + 5 {
        let before = board.load_log().len();
        let log = board.submit(form(&format!("new{n}"), "9", ""));
        assert_eq!(log.newest().unwrap().student_id, format!("new{n}"));
        assert_eq!(log.len(), (before + 1).min(MAX_ENTRIES));
    }
}

#[test]
fn submit_at_capacity_drops_oldest() {
    let board = FeedbackBoard::new(MemoryStore::new());
    fill(&board, MAX_ENTRIES);

    let before = board.load_log();
    let oldest = before.entries().last().unwrap().clone();
    assert_eq!(oldest.student_id, "S0");

    let after = board.submit(form("latest", "10", "bye"));
    assert_eq!(after.len(), MAX_ENTRIES);
    assert!(!after.entries().contains(&oldest));
    assert_eq!(after.entries()[1], before.entries()[0]);
}

#[test]
fn load_on_empty_or_corrupted_store_is_empty() {
    let empty = FeedbackBoard::new(MemoryStore::new());
    assert!(empty.load_log().is_empty());

    for junk in ["", "{", "42", "\"text\"", "[1,2,3]", "[{\"studentId\":\"x\"}]"] {
        let store = MemoryStore::with_entries(vec![("portfolioComments", junk)]);
        assert!(FeedbackBoard::new(store).load_log().is_empty(), "junk: {junk:?}");
    }

    assert!(FeedbackBoard::new(BrokenStore).load_log().is_empty());
}

#[test]
fn corrupted_log_is_replaced_on_next_submit() {
    let store = MemoryStore::with_entries(vec![("portfolioComments", "not json")]);
    let board = FeedbackBoard::new(store.clone());

    let log = board.submit(form("S1", "8", "Great work"));
    assert_eq!(log.len(), 1);

    let raw = store.get("portfolioComments").unwrap().unwrap();
    assert_eq!(FeedbackLog::decode(&raw).unwrap(), log);
}

#[test]
fn round_trip_reflects_submission() {
    let board = FeedbackBoard::new(MemoryStore::new());
    board.load_log();
    let submitted = board.submit(form("S9", "6", "Nice"));
    let reloaded = board.load_log();
    assert_eq!(reloaded.newest(), submitted.newest());
    assert_eq!(reloaded.newest().unwrap().student_id, "S9");
}

#[test]
fn identical_submissions_are_not_deduplicated() {
    let board = FeedbackBoard::new(MemoryStore::new());
    board.submit(form("S1", "8", "same"));
    board.submit(form("S1", "8", "same"));
    assert_eq!(board.load_log().len(), 2);
}

#[test]
fn unwritable_store_still_returns_new_log() {
    let board = FeedbackBoard::new(BrokenStore);
    let log = board.submit(form("S1", "8", "Great work"));
    assert_eq!(log.len(), 1);
    assert!(board.load_log().is_empty());
}

#[test]
fn legacy_string_ratings_render() {
    let raw = r#"[{"studentId":"old","rating":"7","comment":"from before","date":"2023-11-02T09:30:00.000Z"}]"#;
    let board = FeedbackBoard::new(MemoryStore::with_entries(vec![("portfolioComments", raw)]));
    let view = CommentsView::from_log_in(&board.load_log(), &Utc);
    assert_eq!(view.count_label, "1 comment");
    assert_eq!(view.cards[0].rating_label, "7/10");
    assert_eq!(view.cards[0].date_label, "11/2/2023");
}

#[test]
fn float_encoded_ratings_keep_the_log() {
    let raw = r#"[{"studentId":"a","rating":7,"comment":null,"date":"2024-02-01T10:00:00.000Z"},{"studentId":"b","rating":7.0,"comment":null,"date":"2024-02-01T09:00:00.000Z"}]"#;
    let store = MemoryStore::with_entries(vec![("portfolioComments", raw)]);
    let board = FeedbackBoard::new(store);
    assert_eq!(board.load_log().len(), 2);

    let log = board.submit(form("c", "1e1", ""));
    assert_eq!(log.len(), 3);
    assert_eq!(log.newest().unwrap().rating.value(), 10);
    assert_eq!(log.entries()[2].student_id, "b");
}

#[test]
fn whitespace_id_is_accepted_as_typed() {
    let board = FeedbackBoard::new(MemoryStore::new());
    let log = board.submit(form("  ", "5.0", "hi"));
    assert_eq!(log.newest().unwrap().student_id, "  ");
    assert_eq!(log.newest().unwrap().rating.value(), 5);
}

#[test]
fn render_counts_and_empty_state() {
    let board = FeedbackBoard::new(MemoryStore::new());

    let view = CommentsView::from_log(&board.load_log());
    assert!(view.is_empty());
    assert_eq!(view.count_label, "0 comments");

    let view = CommentsView::from_log(&board.submit(form("S1", "8", "")));
    assert!(!view.is_empty());
    assert_eq!(view.count_label, "1 comment");
}

#[test]
fn two_submissions_scenario() {
    let board = FeedbackBoard::new(MemoryStore::new());
    board.submit(form("S1", "8", "Great work"));
    let log = board.submit(form("S2", "10", ""));

    let view = CommentsView::from_log(&log);
    assert_eq!(view.count_label, "2 comments");

    let first = &view.cards[0];
    assert_eq!(first.student_id, "S2");
    assert_eq!(first.rating_label, "10/10");
    assert_eq!(first.comment_text, NO_COMMENT_PLACEHOLDER);
    assert_eq!(first.comment_text, "No comment provided.");

    let html = first.to_html();
    assert!(html.contains("S2"));
    assert!(html.contains("10/10"));
    assert!(html.contains("No comment provided."));

    assert_eq!(view.cards[1].comment_text, "Great work");
}
