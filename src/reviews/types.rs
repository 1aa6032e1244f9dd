//! Core data types for review documents
//!
//! - `ReviewDocument`: the top-level `{ "reviews": [...] }` object
//! - `ReviewRecord`: one reviewed establishment
//! - `Ratings`: the five rating dimensions
//! - `WouldReturn`: return intent

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Top-level shape of the review document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewDocument {
    /// Malformed entries are dropped with a warning; the rest keep their order
    #[serde(default, deserialize_with = "deserialize_records")]
    pub reviews: Vec<ReviewRecord>,
}

fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<ReviewRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;

    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed review record");
                None
            }
        })
        .collect())
}

/// One reviewed establishment
///
/// Records are immutable once loaded and are kept in document order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub name: String,
    pub location: String,
    pub category: String,
    pub review: String,
    /// May be missing or `null` in the document
    #[serde(default)]
    pub images: Option<Vec<String>>,
    pub ratings: Ratings,
    pub would_return: WouldReturn,
    /// ISO-ish date string, parsed lazily
    pub date: String,
}

impl ReviewRecord {
    /// Image references, empty when the document has none
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// First image, used as the card image on the homepage
    pub fn primary_image(&self) -> Option<&str> {
        self.images().first().map(String::as_str)
    }

    /// Anchor id of this record's block on the reviews page
    pub fn anchor(&self) -> String {
        format!("review-{}", self.id)
    }
}

/// Record identifier, either numeric or textual in the document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ReviewId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Number(n) => write!(f, "{}", n),
            ReviewId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Rating dimensions, each nominally in [0, 10]
///
/// Values are not validated on load; formatters clamp at display time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub overall: i32,
    pub food_quality: i32,
    pub value: i32,
    pub service: i32,
    pub portion_size: i32,
}

impl Ratings {
    /// Detail dimensions in display order (overall is shown separately)
    pub fn detail_rows(&self) -> [(&'static str, i32); 4] {
        [
            ("Food Quality", self.food_quality),
            ("Value", self.value),
            ("Service", self.service),
            ("Portion Size", self.portion_size),
        ]
    }
}

/// Whether the reviewer would go back
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum WouldReturn {
    Yes,
    No,
}

impl WouldReturn {
    pub fn is_yes(&self) -> bool {
        matches!(self, WouldReturn::Yes)
    }
}

impl From<String> for WouldReturn {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("yes") {
            WouldReturn::Yes
        } else {
            WouldReturn::No
        }
    }
}

impl From<WouldReturn> for String {
    fn from(value: WouldReturn) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WouldReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WouldReturn::Yes => write!(f, "Yes"),
            WouldReturn::No => write!(f, "No"),
        }
    }
}

/// Parse `YYYY-MM-DD`, RFC 3339 timestamps, or a date followed by a time
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": 7,
        "name": "Noodle Bar",
        "location": "Downtown",
        "category": "Asian",
        "review": "Great broth.",
        "images": ["images/noodle-1.jpg", "images/noodle-2.jpg"],
        "ratings": {"overall": 8, "foodQuality": 9, "value": 7, "service": 6, "portionSize": 8},
        "wouldReturn": "Yes",
        "date": "2024-03-03"
    }"#;

    #[test]
    fn test_record_deserializes_camel_case() {
        let record: ReviewRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.id, ReviewId::Number(7));
        assert_eq!(record.ratings.food_quality, 9);
        assert_eq!(record.ratings.portion_size, 8);
        assert_eq!(record.would_return, WouldReturn::Yes);
        assert_eq!(record.primary_image(), Some("images/noodle-1.jpg"));
        assert_eq!(record.anchor(), "review-7");
    }

    #[test]
    fn test_missing_and_null_images() {
        let missing = RECORD.replace(
            r#""images": ["images/noodle-1.jpg", "images/noodle-2.jpg"],"#,
            "",
        );
        let record: ReviewRecord = serde_json::from_str(&missing).unwrap();
        assert!(record.images().is_empty());
        assert_eq!(record.primary_image(), None);

        let null = RECORD.replace(
            r#"["images/noodle-1.jpg", "images/noodle-2.jpg"]"#,
            "null",
        );
        let record: ReviewRecord = serde_json::from_str(&null).unwrap();
        assert!(record.images().is_empty());
    }

    #[test]
    fn test_text_id() {
        let text = RECORD.replace(r#""id": 7"#, r#""id": "noodle-bar""#);
        let record: ReviewRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(record.id, ReviewId::Text("noodle-bar".to_string()));
        assert_eq!(record.anchor(), "review-noodle-bar");
    }

    #[test]
    fn test_would_return_is_lenient() {
        assert_eq!(WouldReturn::from("yes".to_string()), WouldReturn::Yes);
        assert_eq!(WouldReturn::from("YES".to_string()), WouldReturn::Yes);
        assert_eq!(WouldReturn::from("No".to_string()), WouldReturn::No);
        assert_eq!(WouldReturn::from("Maybe".to_string()), WouldReturn::No);
    }

    #[test]
    fn test_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(parse_calendar_date("2024-03-03"), Some(expected));
        assert_eq!(parse_calendar_date("2024-03-03T18:30:00Z"), Some(expected));
        assert_eq!(parse_calendar_date("2024-03-03 18:30"), Some(expected));
        assert_eq!(parse_calendar_date("sometime in spring"), None);
    }

    #[test]
    fn test_detail_rows_order() {
        let record: ReviewRecord = serde_json::from_str(RECORD).unwrap();
        let labels: Vec<&str> = record
            .ratings
            .detail_rows()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, ["Food Quality", "Value", "Service", "Portion Size"]);
    }

    #[test]
    fn test_empty_document() {
        let doc: ReviewDocument = serde_json::from_str(r#"{"reviews": []}"#).unwrap();
        assert!(doc.reviews.is_empty());

        let doc: ReviewDocument = serde_json::from_str(r#"{"reviews": null}"#).unwrap();
        assert!(doc.reviews.is_empty());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let no_category = RECORD
            .replace(r#""id": 7"#, r#""id": 8"#)
            .replace(r#""category": "Asian","#, "");
        let fractional = RECORD
            .replace(r#""id": 7"#, r#""id": 9"#)
            .replace(r#""overall": 8"#, r#""overall": 8.5"#);
        let text = format!(
            r#"{{"reviews": [{}, {}, {}, "not a record"]}}"#,
            no_category, RECORD, fractional
        );

        let doc: ReviewDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(doc.reviews.len(), 1);
        assert_eq!(doc.reviews[0].id, ReviewId::Number(7));
    }

    #[test]
    fn test_reviews_must_be_a_list() {
        assert!(serde_json::from_str::<ReviewDocument>(r#"{"reviews": "none"}"#).is_err());
    }
}
