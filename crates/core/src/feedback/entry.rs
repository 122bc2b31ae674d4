//! Feedback entries and the form that produces them

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Rejections mirroring the native constraints of the comment form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("student id is required")]
    MissingStudentId,
    #[error("rating is not a whole number: {0:?}")]
    InvalidRating(String),
    #[error("rating {0} is outside 0..=10")]
    RatingOutOfRange(String),
}

/// Score out of ten
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, FormError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or_else(|| FormError::RatingOutOfRange(value.to_string()))
    }

    /// Accept any whole number in range, however it is spelled (`5`, `5.0`, `1e1`)
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Result<Self, FormError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(FormError::InvalidRating(value.to_string()));
        }
        if !(0.0..=f64::from(Self::MAX)).contains(&value) {
            return Err(FormError::RatingOutOfRange(value.to_string()));
        }
        Ok(Self(value as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| FormError::InvalidRating(trimmed.to_string()))?;
        Self::from_f64(value)
    }
}

// Older pages stored the raw form value, so "8" and 8 are both accepted.
impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::from_f64(n),
            Raw::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// One submitted comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub student_id: String,
    pub rating: Rating,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub comment: Option<String>,
    #[serde(rename = "date", with = "iso_millis")]
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn from_form(form: FeedbackForm, submitted_at: DateTime<Utc>) -> Self {
        Self {
            student_id: form.student_id,
            rating: form.rating,
            comment: form.comment,
            submitted_at,
        }
    }

    /// Short calendar date (m/d/yyyy) in the viewer's local time
    pub fn display_date(&self) -> String {
        self.display_date_in(&Local)
    }

    pub fn display_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.submitted_at
            .with_timezone(tz)
            .format("%-m/%-d/%Y")
            .to_string()
    }
}

/// Validated form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    pub student_id: String,
    pub rating: Rating,
    pub comment: Option<String>,
}

impl FeedbackForm {
    /// Parse raw field values as the browser hands them over.
    ///
    /// Only what `required` and `type=number min=0 max=10` enforce is
    /// checked; the id and comment are kept exactly as typed.
    pub fn parse(student_id: &str, rating: &str, comment: Option<&str>) -> Result<Self, FormError> {
        if student_id.is_empty() {
            return Err(FormError::MissingStudentId);
        }

        Ok(Self {
            student_id: student_id.to_string(),
            rating: rating.parse()?,
            comment: comment.filter(|c| !c.is_empty()).map(ToString::to_string),
        })
    }
}

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|c| !c.is_empty()))
}

/// `Date.prototype.toISOString` layout: millisecond precision, `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for FeedbackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/10 @ {}",
            self.student_id,
            self.rating,
            self.submitted_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!("0".parse::<Rating>().unwrap().value(), 0);
        assert_eq!(" 10 ".parse::<Rating>().unwrap().value(), 10);
        assert_eq!(
            "11".parse::<Rating>(),
            Err(FormError::RatingOutOfRange("11".to_string()))
        );
        assert_eq!(
            "-1".parse::<Rating>(),
            Err(FormError::RatingOutOfRange("-1".to_string()))
        );
        assert_eq!(
            "5.5".parse::<Rating>(),
            Err(FormError::InvalidRating("5.5".to_string()))
        );
        assert!("NaN".parse::<Rating>().is_err());
        assert!("inf".parse::<Rating>().is_err());
        assert_eq!(
            "abc".parse::<Rating>(),
            Err(FormError::InvalidRating("abc".to_string()))
        );
    }

    #[test]
    fn test_rating_accepts_any_whole_number_spelling() {
        assert_eq!("5.0".parse::<Rating>().unwrap().value(), 5);
        assert_eq!("10.0".parse::<Rating>().unwrap().value(), 10);
        assert_eq!("1e1".parse::<Rating>().unwrap().value(), 10);
        assert_eq!("-0".parse::<Rating>().unwrap().value(), 0);
    }

    #[test]
    fn test_form_requires_student_id() {
        assert_eq!(
            FeedbackForm::parse("", "5", None),
            Err(FormError::MissingStudentId)
        );
    }

    #[test]
    fn test_form_keeps_text_as_typed() {
        let form = FeedbackForm::parse("  ", "5.0", Some("  ")).unwrap();
        assert_eq!(form.student_id, "  ");
        assert_eq!(form.rating.value(), 5);
        assert_eq!(form.comment.as_deref(), Some("  "));

        let form = FeedbackForm::parse(" S1 ", "8", Some("")).unwrap();
        assert_eq!(form.student_id, " S1 ");
        assert_eq!(form.comment, None);
    }

    #[test]
    fn test_entry_wire_shape() {
        let form = FeedbackForm::parse("S1", "8", Some("Great work")).unwrap();
        let entry = FeedbackEntry::from_form(form, at_noon());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["studentId"], "S1");
        assert_eq!(json["rating"], 8);
        assert_eq!(json["comment"], "Great work");
        assert_eq!(json["date"], "2024-03-07T12:00:00.000Z");
    }

    #[test]
    fn test_entry_accepts_legacy_string_rating_and_empty_comment() {
        let raw = r#"{"studentId":"S2","rating":"10","comment":"","date":"2024-03-07T12:00:00.000Z"}"#;
        let entry: FeedbackEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.rating.value(), 10);
        assert_eq!(entry.comment, None);
        assert_eq!(entry.submitted_at, at_noon());
    }

    #[test]
    fn test_entry_missing_comment() {
        let raw = r#"{"studentId":"S3","rating":4,"date":"2024-03-07T12:00:00Z"}"#;
        let entry: FeedbackEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.comment, None);
    }

    #[test]
    fn test_entry_accepts_float_encoded_rating() {
        let raw = r#"{"studentId":"S4","rating":7.0,"comment":null,"date":"2024-03-07T12:00:00Z"}"#;
        let entry: FeedbackEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.rating.value(), 7);
        assert_eq!(serde_json::to_value(&entry).unwrap()["rating"], 7);
    }

    #[test]
    fn test_entry_rejects_out_of_range_rating() {
        let raw = r#"{"studentId":"S3","rating":42,"comment":null,"date":"2024-03-07T12:00:00Z"}"#;
        assert!(serde_json::from_str::<FeedbackEntry>(raw).is_err());
    }

    #[test]
    fn test_display_date() {
        let form = FeedbackForm::parse("S1", "8", None).unwrap();
        let entry = FeedbackEntry::from_form(form, at_noon());
        assert_eq!(entry.display_date_in(&Utc), "3/7/2024");

        let far_east = FixedOffset::east_opt(13 * 3600).unwrap();
        assert_eq!(entry.display_date_in(&far_east), "3/8/2024");
    }
}
