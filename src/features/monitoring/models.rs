use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Approve,
    Reject,
    Feedback,
    Rating,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Create => "📝",
            ActivityKind::Approve => "✅",
            ActivityKind::Reject => "❌",
            ActivityKind::Feedback => "💬",
            ActivityKind::Rating => "⭐",
            ActivityKind::Other => "📋",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(with = "crate::shared::serde_helpers::lenient_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: ActivityKind,
}

fn default_kind() -> ActivityKind {
    ActivityKind::Other
}

/// Header figures on the monitoring page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityCounts {
    pub total: usize,
    pub approvals: usize,
    pub new_reports: usize,
    pub ratings: usize,
}

pub fn activity_counts(activities: &[ActivityEntry]) -> ActivityCounts {
    ActivityCounts {
        total: activities.len(),
        approvals: count_kind(activities, ActivityKind::Approve),
        new_reports: count_kind(activities, ActivityKind::Create),
        ratings: count_kind(activities, ActivityKind::Rating),
    }
}

fn count_kind(activities: &[ActivityEntry], kind: ActivityKind) -> usize {
    activities.iter().filter(|a| a.kind == kind).count()
}

/// Feed shown when the backend has no activity log to offer.
pub fn builtin_feed() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: "1".to_string(),
            user: Some("Mr. Thokoana Tsekiso".to_string()),
            action: Some("Created Report".to_string()),
            course: Some("Web Application".to_string()),
            time: Some("2 hours ago".to_string()),
            kind: ActivityKind::Create,
        },
        ActivityEntry {
            id: "2".to_string(),
            user: Some("Mr. Teboho Talasi".to_string()),
            action: Some("Approved Report".to_string()),
            course: Some("Java OOP".to_string()),
            time: Some("3 hours ago".to_string()),
            kind: ActivityKind::Approve,
        },
    ]
}
