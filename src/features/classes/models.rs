use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(with = "crate::shared::serde_helpers::lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub students: Option<i64>,
    #[serde(default)]
    pub lecturer: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}

/// Header figures on the classes page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub total_classes: usize,
    pub total_students: i64,
    pub average_class_size: i64,
}

pub fn class_stats(classes: &[ClassInfo]) -> ClassStats {
    let total_students: i64 = classes.iter().filter_map(|c| c.students).sum();
    let average_class_size = if classes.is_empty() {
        0
    } else {
        (total_students as f64 / classes.len() as f64).round() as i64
    };

    ClassStats {
        total_classes: classes.len(),
        total_students,
        average_class_size,
    }
}

/// Roster shown when the backend has no class data to offer.
// TODO: drop once /classes serves lecturer assignments in production.
pub fn builtin_roster() -> Vec<ClassInfo> {
    vec![
        ClassInfo {
            id: "1".to_string(),
            name: "DIT 1A".to_string(),
            program: Some("DIT".to_string()),
            students: Some(30),
            lecturer: Some("Mr. Thokoana Tsekiso".to_string()),
            room: Some("MM5".to_string()),
        },
        ClassInfo {
            id: "2".to_string(),
            name: "DIT 1B".to_string(),
            program: Some("DIT".to_string()),
            students: Some(28),
            lecturer: Some("Mr. Teboho Talasi".to_string()),
            room: Some("MM4".to_string()),
        },
    ]
}
