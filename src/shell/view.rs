use crate::features::auth::models::Role;
use crate::features::classes::models::{class_stats, ClassInfo, ClassStats};
use crate::features::dashboard::stats::{status_counts, StatusCounts};
use crate::features::monitoring::models::{activity_counts, ActivityCounts};
use crate::features::ratings::models::{course_name_for, star_display, summarize, RatingSummary};
use crate::features::reports::dtos::ReportDraft;
use crate::features::reports::filter::filter_reports;
use crate::features::reports::models::{Report, ReportStatus};
use crate::shell::state::{AppState, Notice, Page, RatingForm};

/// Renderer-independent description of one frame. Everything role- or
/// data-conditional is decided here; frontends only draw what they are given.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub loading: bool,
    pub notice: Option<Notice>,
    /// Present only while authenticated.
    pub chrome: Option<Chrome>,
    pub body: PageView,
    /// Drill-down shown over the page body when loaded.
    pub detail: Option<DetailView>,
}

#[derive(Debug, Clone)]
pub struct Chrome {
    pub user_name: String,
    pub role: Role,
    pub sidebar_open: bool,
    pub menu: Vec<MenuItem>,
    pub active: Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub page: Page,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub enum PageView {
    Login,
    Register,
    Dashboard(DashboardView),
    Reports(ReportsView),
    NewReport(NewReportView),
    Classes(ClassesView),
    Monitoring(MonitoringView),
    Rating(RatingView),
    UnderDevelopment(&'static str),
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: StatusCounts,
    pub recent: Vec<ReportCard>,
}

#[derive(Debug, Clone)]
pub struct ReportsView {
    pub search_term: String,
    pub rows: Vec<ReportCard>,
    /// Only lecturers get the shortcut into the report form.
    pub can_create: bool,
}

#[derive(Debug, Clone)]
pub struct ReportCard {
    pub id: String,
    pub course_name: String,
    pub course_code: String,
    pub class_name: String,
    pub lecturer_name: String,
    pub status: ReportStatus,
    pub week: String,
    pub date: String,
    pub attendance: String,
    pub venue: String,
    pub topic: String,
    pub outcomes: String,
    pub recommendations: String,
    /// Approve/reject pair; offered to principal lecturers on pending rows.
    pub offer_review: bool,
}

#[derive(Debug, Clone)]
pub struct NewReportView {
    pub draft: ReportDraft,
}

#[derive(Debug, Clone)]
pub struct ClassesView {
    pub stats: ClassStats,
    pub classes: Vec<ClassInfo>,
}

#[derive(Debug, Clone)]
pub struct MonitoringView {
    pub counts: ActivityCounts,
    pub feed: Vec<ActivityLine>,
}

#[derive(Debug, Clone)]
pub struct ActivityLine {
    pub icon: &'static str,
    pub user: String,
    pub action: String,
    pub course: String,
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct RatingView {
    pub summary: RatingSummary,
    pub report_count: usize,
    /// Selectable reports: id plus "course - week (date)" label.
    pub options: Vec<(String, String)>,
    pub form: RatingForm,
    pub entries: Vec<RatingLine>,
}

#[derive(Debug, Clone)]
pub struct RatingLine {
    pub course_name: String,
    pub author: String,
    pub stars: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub report: ReportCard,
    pub ratings: Vec<RatingLine>,
    pub average: Option<f64>,
}

/// The one place all role- and page-conditional rendering lives.
pub fn view(state: &AppState) -> ViewModel {
    let session = match &state.session {
        Some(session) => session,
        None => {
            return ViewModel {
                loading: state.loading,
                notice: state.notice.clone(),
                chrome: None,
                body: match state.page {
                    Page::Register => PageView::Register,
                    _ => PageView::Login,
                },
                detail: None,
            };
        }
    };

    let role = session.user.role;
    let body = match state.page {
        // Unreachable while a session is active; normalized to the landing page.
        Page::Login | Page::Register | Page::Dashboard => PageView::Dashboard(dashboard(state)),
        Page::Reports => PageView::Reports(reports(state, role)),
        Page::NewReport => PageView::NewReport(NewReportView {
            draft: state.draft.clone(),
        }),
        Page::Classes => PageView::Classes(ClassesView {
            stats: class_stats(&state.classes),
            classes: state.classes.clone(),
        }),
        Page::Monitoring => PageView::Monitoring(monitoring(state)),
        Page::Rating => PageView::Rating(rating(state)),
        Page::Other => PageView::UnderDevelopment("This page is under development."),
    };

    ViewModel {
        loading: state.loading,
        notice: state.notice.clone(),
        chrome: Some(Chrome {
            user_name: session.user.name.clone(),
            role,
            sidebar_open: state.sidebar_open,
            menu: menu_items(role),
            active: state.page,
        }),
        body,
        detail: state.detail.as_ref().map(|detail| DetailView {
            report: report_card(&detail.report, Role::Student),
            ratings: detail.ratings.iter().map(|r| rating_line(r, state)).collect(),
            average: detail.average,
        }),
    }
}

/// Menu per role; only lecturers see "New Report".
pub fn menu_items(role: Role) -> Vec<MenuItem> {
    let mut menu = vec![
        MenuItem {
            page: Page::Dashboard,
            label: "Dashboard",
        },
        MenuItem {
            page: Page::Reports,
            label: "Reports",
        },
    ];
    if role == Role::Lecturer {
        menu.push(MenuItem {
            page: Page::NewReport,
            label: "New Report",
        });
    }
    menu.extend([
        MenuItem {
            page: Page::Classes,
            label: "Classes",
        },
        MenuItem {
            page: Page::Monitoring,
            label: "Monitoring",
        },
        MenuItem {
            page: Page::Rating,
            label: "Rating",
        },
    ]);
    menu
}

fn dashboard(state: &AppState) -> DashboardView {
    let role = state.role().unwrap_or(Role::Student);
    DashboardView {
        stats: status_counts(&state.reports),
        recent: state
            .reports
            .iter()
            .take(5)
            .map(|r| report_card(r, role))
            .collect(),
    }
}

fn reports(state: &AppState, role: Role) -> ReportsView {
    ReportsView {
        search_term: state.search_term.clone(),
        rows: filter_reports(&state.reports, &state.search_term)
            .into_iter()
            .map(|r| report_card(r, role))
            .collect(),
        can_create: role == Role::Lecturer,
    }
}

fn monitoring(state: &AppState) -> MonitoringView {
    MonitoringView {
        counts: activity_counts(&state.activities),
        feed: state
            .activities
            .iter()
            .map(|a| ActivityLine {
                icon: a.kind.icon(),
                user: a.user.clone().unwrap_or_default(),
                action: a.action.clone().unwrap_or_default(),
                course: a.course.clone().unwrap_or_default(),
                time: a.time.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

fn rating(state: &AppState) -> RatingView {
    RatingView {
        summary: summarize(&state.ratings),
        report_count: state.reports.len(),
        options: state
            .reports
            .iter()
            .map(|r| {
                let label = format!(
                    "{} - {} ({})",
                    r.course_name.as_deref().unwrap_or("Unknown"),
                    r.week.as_deref().unwrap_or_default(),
                    r.date.as_deref().unwrap_or_default(),
                );
                (r.id.clone(), label)
            })
            .collect(),
        form: state.rating_form.clone(),
        entries: state
            .ratings
            .iter()
            .map(|r| rating_line(r, state))
            .collect(),
    }
}

fn rating_line(rating: &crate::features::ratings::models::Rating, state: &AppState) -> RatingLine {
    RatingLine {
        course_name: course_name_for(rating, &state.reports).to_string(),
        author: rating
            .user_name
            .clone()
            .unwrap_or_else(|| "Anonymous".to_string()),
        stars: star_display(rating.rating),
        rating: rating.rating,
        comment: rating.comment.clone().filter(|c| !c.is_empty()),
        date: rating
            .created_at
            .map(|at| at.format("%Y-%m-%d").to_string()),
    }
}

fn report_card(report: &Report, viewer_role: Role) -> ReportCard {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    ReportCard {
        id: report.id.clone(),
        course_name: report
            .course_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        course_code: text(&report.course_code),
        class_name: text(&report.class_name),
        lecturer_name: report
            .lecturer_name
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        status: report.status,
        week: text(&report.week),
        date: text(&report.date),
        attendance: format!(
            "{}/{}",
            report.students_present.as_deref().unwrap_or("-"),
            report.students_registered.as_deref().unwrap_or("-"),
        ),
        venue: text(&report.venue),
        topic: text(&report.topic),
        outcomes: text(&report.learning_outcomes),
        recommendations: text(&report.recommendations),
        offer_review: viewer_role == Role::Prl && report.status == ReportStatus::Pending,
    }
}
