use serde::{Deserialize, Serialize};

/// Approval state of a report. New reports default server-side to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Approved => write!(f, "approved"),
            ReportStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A lecturer's weekly class log as returned by the backend.
///
/// The backend is loose about which fields a row actually carries, so
/// everything the views merely display is optional and treated as empty when
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(with = "crate::shared::serde_helpers::lenient_id")]
    pub id: String,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub lecturer_name: Option<String>,
    #[serde(default, with = "crate::shared::serde_helpers::lenient_id_opt")]
    pub students_present: Option<String>,
    #[serde(default, with = "crate::shared::serde_helpers::lenient_id_opt")]
    pub students_registered: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub learning_outcomes: Option<String>,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default, with = "crate::shared::serde_helpers::lenient_id_opt")]
    pub lecturer_id: Option<String>,
}
