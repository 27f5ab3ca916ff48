use crate::features::auth::models::Session;
use crate::features::classes::models::ClassInfo;
use crate::features::monitoring::models::ActivityEntry;
use crate::features::ratings::models::Rating;
use crate::features::reports::dtos::ReportDraft;
use crate::features::reports::models::Report;

/// The navigable pages. `Other` covers anything the shell has no dedicated
/// rendering for and shows as under development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Reports,
    NewReport,
    Classes,
    Monitoring,
    Rating,
    Other,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::Reports => "Reports",
            Page::NewReport => "New Report",
            Page::Classes => "Classes",
            Page::Monitoring => "Monitoring",
            Page::Rating => "Rating",
            Page::Other => "Other",
        }
    }
}

/// One-shot user-facing message; replaced by the next event, cleared on
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Warning(text) | Notice::Error(text) => text,
        }
    }
}

/// In-progress rating entry on the rating page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingForm {
    pub selected_report: Option<String>,
    pub stars: u8,
    pub comment: String,
}

/// Drill-down loaded by the inspect command; rendered over the current page
/// until dismissed.
#[derive(Debug, Clone)]
pub struct ReportDetail {
    pub report: Report,
    pub ratings: Vec<Rating>,
    pub average: Option<f64>,
}

/// The whole shell state. Mutated only by the reducer in `update`.
#[derive(Debug)]
pub struct AppState {
    pub session: Option<Session>,
    pub page: Page,
    pub reports: Vec<Report>,
    pub ratings: Vec<Rating>,
    pub classes: Vec<ClassInfo>,
    pub activities: Vec<ActivityEntry>,
    pub detail: Option<ReportDetail>,
    pub search_term: String,
    pub loading: bool,
    pub sidebar_open: bool,
    pub draft: ReportDraft,
    pub rating_form: RatingForm,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Initial state. With a restored session the shell starts on the
    /// dashboard, otherwise on the login page; the session is present iff
    /// the page is not login/register.
    pub fn new(restored: Option<Session>) -> Self {
        let page = if restored.is_some() {
            Page::Dashboard
        } else {
            Page::Login
        };

        Self {
            session: restored,
            page,
            reports: Vec::new(),
            ratings: Vec::new(),
            classes: Vec::new(),
            activities: Vec::new(),
            detail: None,
            search_term: String::new(),
            loading: false,
            sidebar_open: true,
            draft: ReportDraft::default(),
            rating_form: RatingForm::default(),
            notice: None,
        }
    }

    pub fn role(&self) -> Option<crate::features::auth::models::Role> {
        self.session.as_ref().map(|s| s.user.role)
    }
}
