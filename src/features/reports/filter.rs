use crate::features::reports::models::Report;

/// A report matches when the lowercased term is a substring of its course
/// name, course code or lecturer name. Missing fields count as empty, and an
/// empty term matches everything.
pub fn matches_search(report: &Report, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [
        report.course_name.as_deref(),
        report.course_code.as_deref(),
        report.lecturer_name.as_deref(),
    ]
    .iter()
    .any(|field| field.unwrap_or_default().to_lowercase().contains(&term))
}

/// Client-side pass applied on every render, on top of whatever the server
/// already filtered.
pub fn filter_reports<'a>(reports: &'a [Report], term: &str) -> Vec<&'a Report> {
    reports
        .iter()
        .filter(|report| matches_search(report, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(course_name: &str, course_code: &str, lecturer_name: &str) -> Report {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "course_name": course_name,
            "course_code": course_code,
            "lecturer_name": lecturer_name,
        }))
        .unwrap()
    }

    #[test]
    fn empty_term_matches_everything() {
        let reports = vec![report("Java OOP", "JAV101", "Mr. Talasi")];
        assert_eq!(filter_reports(&reports, "").len(), 1);
    }

    #[test]
    fn term_is_case_insensitive_across_all_three_fields() {
        let r = report("Web Application", "WEB202", "Mr. Tsekiso");
        assert!(matches_search(&r, "web app"));
        assert!(matches_search(&r, "web202"));
        assert!(matches_search(&r, "TSEKISO"));
        assert!(!matches_search(&r, "java"));
    }

    #[test]
    fn missing_fields_are_treated_as_empty() {
        let sparse: Report = serde_json::from_value(serde_json::json!({"id": "1"})).unwrap();
        assert!(!matches_search(&sparse, "java"));
        assert!(matches_search(&sparse, ""));
    }

    #[test]
    fn filter_keeps_only_matching_rows() {
        let reports = vec![
            report("Java OOP", "JAV101", "Mr. Talasi"),
            report("Web Application", "WEB202", "Mr. Tsekiso"),
            report("Databases", "DBS303", "Ms. Javara"),
        ];
        let hits = filter_reports(&reports, "java");
        // "java" hits the Java course and the lecturer named Javara.
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].course_code.as_deref(), Some("JAV101"));
        assert_eq!(hits[1].course_code.as_deref(), Some("DBS303"));
    }
}
