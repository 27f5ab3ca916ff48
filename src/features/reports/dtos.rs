use serde::Serialize;

use crate::features::reports::models::ReportStatus;
use crate::shared::constants::{DEFAULT_FACULTY, DEFAULT_REGISTERED_COUNT};

/// In-progress report form. Lives only in UI state; reset to the defaults
/// after a successful submission and never persisted otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub faculty: String,
    pub class_name: String,
    pub week: String,
    pub date: String,
    pub course_name: String,
    pub course_code: String,
    pub lecturer_name: String,
    pub present: String,
    pub registered: String,
    pub venue: String,
    pub time: String,
    pub topic: String,
    pub outcomes: String,
    pub recommendations: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            faculty: DEFAULT_FACULTY.to_string(),
            class_name: String::new(),
            week: String::new(),
            date: String::new(),
            course_name: String::new(),
            course_code: String::new(),
            lecturer_name: String::new(),
            present: String::new(),
            registered: DEFAULT_REGISTERED_COUNT.to_string(),
            venue: String::new(),
            time: String::new(),
            topic: String::new(),
            outcomes: String::new(),
            recommendations: String::new(),
        }
    }
}

impl ReportDraft {
    /// Field names as the form addresses them (the wire names).
    pub const FIELDS: [&'static str; 14] = [
        "faculty",
        "className",
        "week",
        "date",
        "courseName",
        "courseCode",
        "lecturerName",
        "present",
        "registered",
        "venue",
        "time",
        "topic",
        "outcomes",
        "recommendations",
    ];

    /// Sets a field by its form name. Returns false for an unknown name.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "faculty" => &mut self.faculty,
            "className" => &mut self.class_name,
            "week" => &mut self.week,
            "date" => &mut self.date,
            "courseName" => &mut self.course_name,
            "courseCode" => &mut self.course_code,
            "lecturerName" => &mut self.lecturer_name,
            "present" => &mut self.present,
            "registered" => &mut self.registered,
            "venue" => &mut self.venue,
            "time" => &mut self.time,
            "topic" => &mut self.topic,
            "outcomes" => &mut self.outcomes,
            "recommendations" => &mut self.recommendations,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    pub fn get_field(&self, field: &str) -> Option<&str> {
        let value = match field {
            "faculty" => &self.faculty,
            "className" => &self.class_name,
            "week" => &self.week,
            "date" => &self.date,
            "courseName" => &self.course_name,
            "courseCode" => &self.course_code,
            "lecturerName" => &self.lecturer_name,
            "present" => &self.present,
            "registered" => &self.registered,
            "venue" => &self.venue,
            "time" => &self.time,
            "topic" => &self.topic,
            "outcomes" => &self.outcomes,
            "recommendations" => &self.recommendations,
            _ => return None,
        };
        Some(value)
    }

    /// All fields are required on the form; returns the first empty one.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|field| {
                self.get_field(field)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(false)
            })
            .copied()
    }
}

/// Payload for the approve/reject action on a pending report.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub feedback: String,
    pub status: ReportStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_blank_form() {
        let draft = ReportDraft::default();
        assert_eq!(draft.faculty, "Faculty of ICT");
        assert_eq!(draft.registered, "30");
        assert_eq!(draft.course_name, "");
        assert_eq!(draft.recommendations, "");
    }

    #[test]
    fn set_field_addresses_every_form_name() {
        let mut draft = ReportDraft::default();
        for field in ReportDraft::FIELDS {
            assert!(draft.set_field(field, "x"), "unaddressable field {field}");
        }
        assert!(!draft.set_field("nonsense", "x"));
    }

    #[test]
    fn first_empty_field_walks_in_form_order() {
        let mut draft = ReportDraft::default();
        assert_eq!(draft.first_empty_field(), Some("className"));

        for field in ReportDraft::FIELDS {
            draft.set_field(field, "filled");
        }
        assert_eq!(draft.first_empty_field(), None);
    }

    #[test]
    fn draft_serializes_with_form_field_names() {
        let value = serde_json::to_value(ReportDraft::default()).unwrap();
        assert!(value.get("className").is_some());
        assert!(value.get("courseCode").is_some());
        assert!(value.get("class_name").is_none());
    }
}
