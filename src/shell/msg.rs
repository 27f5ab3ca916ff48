use std::path::PathBuf;

use crate::core::error::Result;
use crate::features::auth::dtos::{RegisterForm, RegisterRequest};
use crate::features::auth::models::{Role, Session};
use crate::features::classes::models::ClassInfo;
use crate::features::monitoring::models::ActivityEntry;
use crate::features::ratings::dtos::SubmitRatingRequest;
use crate::features::ratings::models::Rating;
use crate::features::reports::dtos::ReportDraft;
use crate::features::reports::models::{Report, ReportStatus};
use crate::shell::state::{Page, ReportDetail};

/// Everything that can happen to the shell: user intents from the frontend
/// and completion messages from the effect runner.
#[derive(Debug)]
pub enum Msg {
    // User intents
    LoginSubmitted {
        email: String,
        password: String,
        role: Role,
    },
    ShowRegister,
    ShowLogin,
    RegisterSubmitted(RegisterForm),
    LoggedOut,
    NavigatedTo(Page),
    SidebarToggled,
    SearchChanged(String),
    DraftFieldChanged {
        field: String,
        value: String,
    },
    ReportSubmitted,
    ApproveRequested {
        report_id: String,
    },
    RejectRequested {
        report_id: String,
    },
    RejectReasonProvided {
        report_id: String,
        reason: Option<String>,
    },
    RatingReportSelected(Option<String>),
    RatingStarsSet(u8),
    RatingCommentChanged(String),
    RatingSubmitted,
    ExportRequested,
    InspectRequested {
        report_id: String,
    },
    DetailClosed,
    HealthRequested,
    StatsRequested,

    // Timer
    SearchDebounceElapsed,

    // Completions
    LoginCompleted(Result<Session>),
    RegisterCompleted(Result<()>),
    ReportsLoaded(Result<Vec<Report>>),
    RatingsLoaded(Result<Vec<Rating>>),
    ClassesLoaded(Result<Vec<ClassInfo>>),
    ActivitiesLoaded(Result<Vec<ActivityEntry>>),
    ReportCreated(Result<()>),
    FeedbackSent {
        status: ReportStatus,
        result: Result<()>,
    },
    RatingSaved(Result<()>),
    ExportCompleted(Result<PathBuf>),
    ReportDetailLoaded(Box<Result<ReportDetail>>),
    HealthChecked(Result<serde_json::Value>),
    ServerStatsLoaded(Result<(serde_json::Value, serde_json::Value)>),
}

/// Side effects the reducer asks the runtime to perform. The reducer itself
/// never touches the network, timers or the durable store.
#[derive(Debug)]
pub enum Effect {
    Login {
        email: String,
        password: String,
        role: Role,
    },
    Register(RegisterRequest),
    ClearSession,
    FetchReports {
        search: String,
    },
    FetchRatings,
    FetchClasses,
    FetchActivities,
    CreateReport(ReportDraft),
    SendFeedback {
        report_id: String,
        feedback: String,
        status: ReportStatus,
    },
    SubmitRating(SubmitRatingRequest),
    ExportReports,
    ArmSearchDebounce,
    PromptRejectReason {
        report_id: String,
    },
    InspectReport {
        report_id: String,
    },
    CheckHealth,
    FetchServerStats,
}
