//! Shared logic for the portfolio page
//!
//! Everything here is free of DOM access so it can be exercised on the host
//! target. The wasm frontend binds these types to `web-sys`.

pub mod config;
pub mod effects;
pub mod feedback;
pub mod store;
pub mod theme;

pub use config::PageConfig;
pub use feedback::{
    Acknowledgement, CommentCard, CommentsView, FeedbackBoard, FeedbackEntry, FeedbackError,
    FeedbackForm, FeedbackLog, FormError, Rating,
};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use theme::{Theme, ThemeStore};
