use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BurndownError, Result};

/// Which card timestamp drives ordering and day bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// When the card was created.
    #[serde(rename = "createdAt")]
    CreatedAt,
    /// When the card last changed (moved, edited, commented).
    #[serde(rename = "dateLastActivity")]
    DateLastActivity,
}

impl SortField {
    /// Parse the wekan field-name spelling used on the command line.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "createdAt" => Ok(Self::CreatedAt),
            "dateLastActivity" => Ok(Self::DateLastActivity),
            other => Err(BurndownError::Config(format!(
                "unknown sort field \"{}\"",
                other
            ))),
        }
    }

    /// Extract the selected timestamp from `card`, `None` when absent.
    pub fn timestamp_of(&self, card: &Card) -> Option<DateTime<Utc>> {
        match self {
            Self::CreatedAt => card.created_at,
            Self::DateLastActivity => card.date_last_activity,
        }
    }
}

/// How the value axis interprets the embedded estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Estimates are hours of work.
    Hours,
    /// Estimates are story points.
    Points,
    /// Estimates are US dollars.
    Dollars,
}

impl Units {
    /// Parse the lowercase spelling used on the command line.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "hours" => Ok(Self::Hours),
            "points" => Ok(Self::Points),
            "dollars" => Ok(Self::Dollars),
            other => Err(BurndownError::Config(format!(
                "unknown units \"{}\"",
                other
            ))),
        }
    }
}

/// A single task card read from a wekan board export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Wekan document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Card title; may carry a parenthesized estimate, e.g. `"Fix bug (3)"`.
    pub title: String,
    /// Id of the board owning this card.
    #[serde(rename = "boardId", default)]
    pub board_id: String,
    /// Id of the list (column) the card currently sits in.
    #[serde(rename = "listId", default)]
    pub list_id: String,
    /// UTC timestamp when the card was created, when present.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// UTC timestamp of the card's last activity, when present.
    #[serde(rename = "dateLastActivity", default)]
    pub date_last_activity: Option<DateTime<Utc>>,
}

/// A board header from a wekan export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Wekan document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Board title.
    pub title: String,
}

/// A list (column) belonging to a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardList {
    /// Wekan document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// List title, e.g. `"Done"`.
    pub title: String,
    /// Id of the board owning this list.
    #[serde(rename = "boardId", default)]
    pub board_id: String,
}

/// One entry of the burndown series: a calendar day and the cumulative
/// estimate total up to and including that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Calendar day (in the configured display timezone).
    pub date: NaiveDate,
    /// Running total of all estimates up to this day.
    pub total: u64,
}

/// Ordered burndown series. Dates are strictly increasing and totals are
/// non-decreasing; empty when no record carried a parseable estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// The day buckets, ascending by date.
    pub points: Vec<TimelinePoint>,
}

impl Timeline {
    /// `true` when no day contributed a non-zero estimate.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of day buckets.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Cumulative total at the end of the series, 0 when empty.
    pub fn final_total(&self) -> u64 {
        self.points.last().map(|p| p.total).unwrap_or(0)
    }

    /// First bucketed day, `None` when empty.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Last bucketed day, `None` when empty.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── SortField ─────────────────────────────────────────────────────────

    #[test]
    fn test_sort_field_from_name() {
        assert_eq!(
            SortField::from_name("createdAt").unwrap(),
            SortField::CreatedAt
        );
        assert_eq!(
            SortField::from_name("dateLastActivity").unwrap(),
            SortField::DateLastActivity
        );
    }

    #[test]
    fn test_sort_field_from_name_unknown() {
        let err = SortField::from_name("modifiedAt").unwrap_err();
        assert!(err.to_string().contains("unknown sort field"));
    }

    #[test]
    fn test_sort_field_timestamp_of() {
        let created = "2018-02-09T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let activity = "2018-02-14T22:01:52Z".parse::<DateTime<Utc>>().unwrap();
        let card = Card {
            id: "c1".to_string(),
            title: "Fix bug (3)".to_string(),
            board_id: "b1".to_string(),
            list_id: "l1".to_string(),
            created_at: Some(created),
            date_last_activity: Some(activity),
        };
        assert_eq!(SortField::CreatedAt.timestamp_of(&card), Some(created));
        assert_eq!(
            SortField::DateLastActivity.timestamp_of(&card),
            Some(activity)
        );
    }

    #[test]
    fn test_sort_field_timestamp_of_missing() {
        let card = Card {
            id: "c1".to_string(),
            title: "No dates".to_string(),
            board_id: String::new(),
            list_id: String::new(),
            created_at: None,
            date_last_activity: None,
        };
        assert!(SortField::CreatedAt.timestamp_of(&card).is_none());
        assert!(SortField::DateLastActivity.timestamp_of(&card).is_none());
    }

    // ── Units ─────────────────────────────────────────────────────────────

    #[test]
    fn test_units_from_name() {
        assert_eq!(Units::from_name("hours").unwrap(), Units::Hours);
        assert_eq!(Units::from_name("points").unwrap(), Units::Points);
        assert_eq!(Units::from_name("dollars").unwrap(), Units::Dollars);
    }

    #[test]
    fn test_units_from_name_unknown() {
        assert!(Units::from_name("bananas").is_err());
    }

    // ── Card serde ────────────────────────────────────────────────────────

    #[test]
    fn test_card_deserialize_wekan_field_names() {
        let json = r#"{
            "_id": "SHKrzWPfwbRDCr2jW",
            "title": "Polish module (5)",
            "boardId": "b1",
            "listId": "l1",
            "createdAt": "2018-02-09T10:00:00.000Z",
            "dateLastActivity": "2018-02-14T22:01:52.334Z"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "SHKrzWPfwbRDCr2jW");
        assert_eq!(card.title, "Polish module (5)");
        assert!(card.created_at.is_some());
        assert!(card.date_last_activity.is_some());
    }

    #[test]
    fn test_card_deserialize_missing_timestamps() {
        let json = r#"{"title": "Bare card"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.title, "Bare card");
        assert!(card.created_at.is_none());
        assert!(card.date_last_activity.is_none());
    }

    // ── Timeline ──────────────────────────────────────────────────────────

    #[test]
    fn test_timeline_empty() {
        let t = Timeline::default();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.final_total(), 0);
        assert!(t.first_date().is_none());
        assert!(t.last_date().is_none());
    }

    #[test]
    fn test_timeline_accessors() {
        let d1 = NaiveDate::from_ymd_opt(2018, 2, 9).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2018, 2, 14).unwrap();
        let t = Timeline {
            points: vec![
                TimelinePoint { date: d1, total: 4 },
                TimelinePoint { date: d2, total: 10 },
            ],
        };
        assert!(!t.is_empty());
        assert_eq!(t.len(), 2);
        assert_eq!(t.final_total(), 10);
        assert_eq!(t.first_date(), Some(d1));
        assert_eq!(t.last_date(), Some(d2));
    }
}
