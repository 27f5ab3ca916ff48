use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::reports::models::Report;

/// Star rating threshold counted as positive on the rating page.
const POSITIVE_THRESHOLD: u8 = 4;

/// A star evaluation attached to a report. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(with = "crate::shared::serde_helpers::lenient_id")]
    pub id: String,
    #[serde(with = "crate::shared::serde_helpers::lenient_id")]
    pub report_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, alias = "user")]
    pub user_name: Option<String>,
    /// Denormalized course name some rows carry; used when the report is not
    /// in the loaded list.
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Aggregates shown in the rating page header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub total: usize,
    pub positive: usize,
}

impl RatingSummary {
    /// Mean rendered the way the page shows it (one decimal).
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }
}

pub fn summarize(ratings: &[Rating]) -> RatingSummary {
    let total = ratings.len();
    let average = if total == 0 {
        0.0
    } else {
        ratings.iter().map(|r| r.rating as f64).sum::<f64>() / total as f64
    };
    let positive = ratings
        .iter()
        .filter(|r| r.rating >= POSITIVE_THRESHOLD)
        .count();

    RatingSummary {
        average,
        total,
        positive,
    }
}

/// Resolves the course a rating refers to by scanning the loaded reports,
/// falling back to the rating's own denormalized course name.
pub fn course_name_for<'a>(rating: &'a Rating, reports: &'a [Report]) -> &'a str {
    reports
        .iter()
        .find(|report| report.id == rating.report_id)
        .and_then(|report| report.course_name.as_deref())
        .or(rating.course_name.as_deref())
        .unwrap_or("Unknown Course")
}

/// Star bar as the page draws it: `rating` filled stars out of five.
pub fn star_display(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
