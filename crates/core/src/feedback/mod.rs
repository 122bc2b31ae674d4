//! Comment and rating widget
//!
//! A bounded, newest-first log persisted as one JSON array under a fixed
//! key, plus the render model the page draws from it.

mod board;
mod entry;
mod log;
mod view;

pub use board::FeedbackBoard;
pub use entry::{FeedbackEntry, FeedbackForm, FormError, Rating};
pub use log::{FeedbackLog, MAX_ENTRIES};
pub use view::{
    count_label, html_escape, Acknowledgement, CommentCard, CommentsView, ACK_DURATION_MS,
    NO_COMMENT_PLACEHOLDER,
};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("malformed feedback log: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode feedback log: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
