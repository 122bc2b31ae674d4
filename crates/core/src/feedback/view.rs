//! Render model for the comment list
//!
//! The DOM layer only swaps markup and toggles visibility; everything shown
//! to the reader is decided here.

use std::fmt;

use chrono::{Local, TimeZone};

use super::entry::{FeedbackEntry, Rating};
use super::log::FeedbackLog;

pub const NO_COMMENT_PLACEHOLDER: &str = "No comment provided.";

/// "1 comment", "0 comments", "2 comments"
pub fn count_label(n: usize) -> String {
    let plural = if n == 1 { "" } else { "s" };
    format!("{n} comment{plural}")
}

/// Escape text for interpolation into markup
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One rendered display block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCard {
    pub student_id: String,
    pub rating_label: String,
    pub comment_text: String,
    pub date_label: String,
}

impl CommentCard {
    /// Class of the wrapping element
    pub const CLASS: &'static str = "comment-item";

    pub fn from_entry_in<Tz: TimeZone>(entry: &FeedbackEntry, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            student_id: entry.student_id.clone(),
            rating_label: rating_label(entry.rating),
            comment_text: entry
                .comment
                .clone()
                .unwrap_or_else(|| NO_COMMENT_PLACEHOLDER.to_string()),
            date_label: entry.display_date_in(tz),
        }
    }

    /// Inner markup of the `.comment-item` block
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="comment-header"><span class="comment-name">{}</span><span class="comment-rating">{}</span></div><div class="comment-text">{}</div><div class="comment-date">{}</div>"#,
            html_escape(&self.student_id),
            html_escape(&self.rating_label),
            html_escape(&self.comment_text),
            html_escape(&self.date_label),
        )
    }
}

/// Whole-list render model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsView {
    pub count_label: String,
    pub cards: Vec<CommentCard>,
}

impl CommentsView {
    pub fn from_log(log: &FeedbackLog) -> Self {
        Self::from_log_in(log, &Local)
    }

    pub fn from_log_in<Tz: TimeZone>(log: &FeedbackLog, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            count_label: count_label(log.len()),
            cards: log.iter().map(|e| CommentCard::from_entry_in(e, tz)).collect(),
        }
    }

    /// Show the "no comments yet" placeholder instead of the list
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn rating_label(rating: Rating) -> String {
    format!("{rating}/{}", Rating::MAX)
}

/// How long the acknowledgement stays on the page
pub const ACK_DURATION_MS: u32 = 3000;

/// Transient thank-you shown after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub student_id: String,
    pub rating: Rating,
}

impl Acknowledgement {
    pub fn for_entry(entry: &FeedbackEntry) -> Self {
        Self {
            student_id: entry.student_id.clone(),
            rating: entry.rating,
        }
    }

    pub fn title(&self) -> String {
        format!("Thank you, {}!", self.student_id)
    }

    pub fn body(&self) -> String {
        format!(
            "Your {} rating and feedback have been recorded.",
            rating_label(self.rating)
        )
    }

    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<div style="background: var(--panel); border: 1px solid var(--border); border-radius: 12px; padding: 20px; margin-top: 20px; text-align: center;">"#,
                r#"<h3 style="color: var(--accent); margin: 0 0 10px;">{}</h3>"#,
                r#"<p style="margin: 0; color: var(--text);">{}</p>"#,
                "</div>"
            ),
            html_escape(&self.title()),
            html_escape(&self.body()),
        )
    }
}
