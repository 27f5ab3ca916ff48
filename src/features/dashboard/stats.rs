use crate::features::reports::models::{Report, ReportStatus};

/// Stat cards on the dashboard, derived at render time from the loaded
/// reports. Nothing here is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

pub fn status_counts(reports: &[Report]) -> StatusCounts {
    StatusCounts {
        total: reports.len(),
        approved: count_status(reports, ReportStatus::Approved),
        pending: count_status(reports, ReportStatus::Pending),
        rejected: count_status(reports, ReportStatus::Rejected),
    }
}

fn count_status(reports: &[Report], status: ReportStatus) -> usize {
    reports.iter().filter(|r| r.status == status).count()
}
