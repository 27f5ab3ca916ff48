use crate::features::auth::models::Role;
use crate::features::classes;
use crate::features::monitoring;
use crate::features::ratings::dtos::SubmitRatingRequest;
use crate::features::reports::dtos::ReportDraft;
use crate::features::reports::models::ReportStatus;
use crate::shell::msg::{Effect, Msg};
use crate::shell::state::{AppState, Notice, Page, RatingForm};

/// Single reducer for the whole shell. Applies the message to the state and
/// returns the effects the runtime must perform; nothing here touches the
/// network, timers or the durable store directly.
pub fn update(state: &mut AppState, msg: Msg) -> Vec<Effect> {
    match msg {
        // ====================================================================
        // Session lifecycle
        // ====================================================================
        Msg::LoginSubmitted {
            email,
            password,
            role,
        } => {
            if email.trim().is_empty() || password.is_empty() {
                state.notice = Some(Notice::Warning(
                    "Email and password are required".to_string(),
                ));
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::Login {
                email,
                password,
                role,
            }]
        }
        Msg::LoginCompleted(Ok(session)) => {
            state.session = Some(session);
            state.page = Page::Dashboard;
            state.notice = None;
            state.loading = true;
            vec![Effect::FetchReports {
                search: state.search_term.clone(),
            }]
        }
        Msg::LoginCompleted(Err(e)) => {
            state.loading = false;
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }
        Msg::ShowRegister => {
            if state.session.is_none() {
                state.page = Page::Register;
                state.notice = None;
            }
            Vec::new()
        }
        Msg::ShowLogin => {
            if state.session.is_none() {
                state.page = Page::Login;
                state.notice = None;
            }
            Vec::new()
        }
        Msg::RegisterSubmitted(form) => match form.validated() {
            Ok(request) => {
                state.loading = true;
                vec![Effect::Register(request)]
            }
            Err(e) => {
                // Rejected locally; no network call happens.
                state.notice = Some(Notice::Warning(e.to_string()));
                Vec::new()
            }
        },
        Msg::RegisterCompleted(Ok(())) => {
            state.loading = false;
            state.page = Page::Login;
            state.notice = Some(Notice::Info(
                "Registration successful! Please login.".to_string(),
            ));
            Vec::new()
        }
        Msg::RegisterCompleted(Err(e)) => {
            state.loading = false;
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }
        Msg::LoggedOut => {
            state.session = None;
            state.page = Page::Login;
            state.reports.clear();
            state.ratings.clear();
            state.detail = None;
            state.rating_form = RatingForm::default();
            state.notice = None;
            vec![Effect::ClearSession]
        }

        // ====================================================================
        // Navigation
        // ====================================================================
        Msg::NavigatedTo(page) => {
            if state.session.is_none() {
                return Vec::new();
            }
            if matches!(page, Page::Login | Page::Register) {
                // The login pair is unreachable while a session is active.
                return Vec::new();
            }
            state.page = page;
            state.notice = None;
            state.detail = None;
            match page {
                Page::Dashboard | Page::Reports => {
                    state.loading = true;
                    vec![Effect::FetchReports {
                        search: state.search_term.clone(),
                    }]
                }
                Page::Rating => vec![Effect::FetchRatings],
                Page::Classes => vec![Effect::FetchClasses],
                Page::Monitoring => vec![Effect::FetchActivities],
                _ => Vec::new(),
            }
        }
        Msg::SidebarToggled => {
            state.sidebar_open = !state.sidebar_open;
            Vec::new()
        }

        // ====================================================================
        // Reports search
        // ====================================================================
        Msg::SearchChanged(term) => {
            state.search_term = term;
            if state.session.is_some() && state.page == Page::Reports {
                vec![Effect::ArmSearchDebounce]
            } else {
                Vec::new()
            }
        }
        Msg::SearchDebounceElapsed => {
            if state.session.is_some() && state.page == Page::Reports {
                state.loading = true;
                vec![Effect::FetchReports {
                    search: state.search_term.clone(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ReportsLoaded(Ok(reports)) => {
            state.loading = false;
            state.reports = reports;
            Vec::new()
        }
        Msg::ReportsLoaded(Err(_)) => {
            // The page keeps whatever it had; the failure was already logged.
            state.loading = false;
            Vec::new()
        }

        // ====================================================================
        // New report form
        // ====================================================================
        Msg::DraftFieldChanged { field, value } => {
            if !state.draft.set_field(&field, &value) {
                state.notice = Some(Notice::Warning(format!("Unknown form field '{}'", field)));
            }
            Vec::new()
        }
        Msg::ReportSubmitted => {
            if state.session.is_none() {
                return Vec::new();
            }
            if let Some(field) = state.draft.first_empty_field() {
                state.notice = Some(Notice::Warning(format!("{} is required", field)));
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::CreateReport(state.draft.clone())]
        }
        Msg::ReportCreated(Ok(())) => {
            state.notice = Some(Notice::Info("Report submitted successfully!".to_string()));
            state.draft = ReportDraft::default();
            state.page = Page::Reports;
            state.loading = true;
            vec![Effect::FetchReports {
                search: state.search_term.clone(),
            }]
        }
        Msg::ReportCreated(Err(e)) => {
            // The draft stays intact for another attempt.
            state.loading = false;
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }

        // ====================================================================
        // Review (approve / reject)
        // ====================================================================
        Msg::ApproveRequested { report_id } => {
            if !review_allowed(state, &report_id) {
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::SendFeedback {
                report_id,
                feedback: "Approved".to_string(),
                status: ReportStatus::Approved,
            }]
        }
        Msg::RejectRequested { report_id } => {
            if !review_allowed(state, &report_id) {
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::PromptRejectReason { report_id }]
        }
        Msg::RejectReasonProvided { report_id, reason } => match reason.filter(|r| !r.is_empty()) {
            Some(reason) => vec![Effect::SendFeedback {
                report_id,
                feedback: reason,
                status: ReportStatus::Rejected,
            }],
            None => {
                // Cancelled prompt: nothing goes over the wire.
                state.loading = false;
                Vec::new()
            }
        },
        Msg::FeedbackSent {
            status,
            result: Ok(()),
        } => {
            state.notice = Some(Notice::Info(match status {
                ReportStatus::Approved => "Report approved!".to_string(),
                _ => "Report rejected!".to_string(),
            }));
            state.loading = true;
            vec![Effect::FetchReports {
                search: state.search_term.clone(),
            }]
        }
        Msg::FeedbackSent {
            result: Err(e), ..
        } => {
            state.loading = false;
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }

        // ====================================================================
        // Ratings
        // ====================================================================
        Msg::RatingReportSelected(report_id) => {
            state.rating_form.selected_report = report_id.filter(|id| !id.is_empty());
            Vec::new()
        }
        Msg::RatingStarsSet(stars) => {
            if (1..=5).contains(&stars) {
                state.rating_form.stars = stars;
            } else {
                state.notice = Some(Notice::Warning(
                    "Rating must be between 1 and 5".to_string(),
                ));
            }
            Vec::new()
        }
        Msg::RatingCommentChanged(comment) => {
            state.rating_form.comment = comment;
            Vec::new()
        }
        Msg::RatingSubmitted => {
            let report_id = match (
                state.rating_form.selected_report.clone(),
                state.rating_form.stars,
            ) {
                (Some(report_id), stars) if stars > 0 => report_id,
                _ => {
                    state.notice = Some(Notice::Warning(
                        "Please select a report and provide a rating!".to_string(),
                    ));
                    return Vec::new();
                }
            };
            state.loading = true;
            vec![Effect::SubmitRating(SubmitRatingRequest {
                report_id,
                rating: state.rating_form.stars,
                comment: state.rating_form.comment.clone(),
            })]
        }
        Msg::RatingSaved(Ok(())) => {
            state.loading = false;
            state.notice = Some(Notice::Info("Rating submitted successfully!".to_string()));
            state.rating_form = RatingForm::default();
            vec![Effect::FetchRatings]
        }
        Msg::RatingSaved(Err(e)) => {
            state.loading = false;
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }
        Msg::RatingsLoaded(Ok(ratings)) => {
            state.ratings = ratings;
            Vec::new()
        }
        Msg::RatingsLoaded(Err(_)) => Vec::new(),

        // ====================================================================
        // Classes / monitoring
        // ====================================================================
        Msg::ClassesLoaded(Ok(list)) => {
            state.classes = list;
            Vec::new()
        }
        Msg::ClassesLoaded(Err(_)) => {
            // Backend has no class data; the page shows the builtin roster.
            state.classes = classes::builtin_roster();
            Vec::new()
        }
        Msg::ActivitiesLoaded(Ok(feed)) => {
            state.activities = feed;
            Vec::new()
        }
        Msg::ActivitiesLoaded(Err(_)) => {
            state.activities = monitoring::builtin_feed();
            Vec::new()
        }

        // ====================================================================
        // Export
        // ====================================================================
        Msg::ExportRequested => {
            if state.session.is_none() {
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::ExportReports]
        }
        Msg::ExportCompleted(Ok(_)) => {
            // The written file is the outcome; nothing else changes.
            state.loading = false;
            Vec::new()
        }
        Msg::ExportCompleted(Err(e)) => {
            state.loading = false;
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }

        // ====================================================================
        // Drill-down and diagnostics
        // ====================================================================
        Msg::InspectRequested { report_id } => {
            if state.session.is_none() {
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::InspectReport { report_id }]
        }
        Msg::ReportDetailLoaded(result) => {
            state.loading = false;
            match *result {
                Ok(detail) => state.detail = Some(detail),
                Err(e) => state.notice = Some(Notice::Error(e.to_string())),
            }
            Vec::new()
        }
        Msg::DetailClosed => {
            state.detail = None;
            Vec::new()
        }
        Msg::HealthRequested => vec![Effect::CheckHealth],
        Msg::HealthChecked(Ok(_)) => {
            state.notice = Some(Notice::Info("Backend is healthy".to_string()));
            Vec::new()
        }
        Msg::HealthChecked(Err(e)) => {
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }
        Msg::StatsRequested => {
            if state.session.is_none() {
                return Vec::new();
            }
            vec![Effect::FetchServerStats]
        }
        Msg::ServerStatsLoaded(Ok((dashboard, monitoring))) => {
            state.notice = Some(Notice::Info(format!(
                "Dashboard stats: {} | Monitoring stats: {}",
                dashboard, monitoring
            )));
            Vec::new()
        }
        Msg::ServerStatsLoaded(Err(e)) => {
            state.notice = Some(Notice::Error(e.to_string()));
            Vec::new()
        }
    }
}

/// Approve/reject is only offered to principal lecturers, and only while the
/// report is still pending.
fn review_allowed(state: &AppState, report_id: &str) -> bool {
    state.role() == Some(Role::Prl)
        && state
            .reports
            .iter()
            .any(|r| r.id == report_id && r.status == ReportStatus::Pending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::dtos::RegisterForm;
    use crate::features::auth::models::{Session, User};
    use crate::features::reports::models::Report;

    fn session(role: Role) -> Session {
        Session {
            user: User {
                id: "u1".to_string(),
                name: "Palesa Molapo".to_string(),
                email: "palesa@luct.ac.ls".to_string(),
                role,
            },
            token: "tok".to_string(),
        }
    }

    fn reports_fixture() -> Vec<Report> {
        serde_json::from_value(serde_json::json!([
            {"id": "1", "course_name": "Java OOP", "status": "pending"},
            {"id": "2", "course_name": "Web Application", "status": "approved"},
            {"id": "3", "course_name": "Databases", "status": "rejected"},
        ]))
        .unwrap()
    }

    fn authed(role: Role) -> AppState {
        let mut state = AppState::new(Some(session(role)));
        state.reports = reports_fixture();
        state
    }

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: "Palesa Molapo".to_string(),
            email: "palesa@luct.ac.ls".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: Some(Role::Student),
        }
    }

    // ------------------------------------------------------------------ auth

    #[test]
    fn initial_page_tracks_session_presence() {
        assert_eq!(AppState::new(None).page, Page::Login);
        assert_eq!(
            AppState::new(Some(session(Role::Student))).page,
            Page::Dashboard
        );
    }

    #[test]
    fn login_success_enters_dashboard_and_fetches_reports() {
        let mut state = AppState::new(None);
        let effects = update(&mut state, Msg::LoginCompleted(Ok(session(Role::Lecturer))));

        assert!(state.session.is_some());
        assert_eq!(state.page, Page::Dashboard);
        assert!(matches!(effects.as_slice(), [Effect::FetchReports { .. }]));
    }

    #[test]
    fn login_failure_surfaces_message_and_stays() {
        let mut state = AppState::new(None);
        let effects = update(
            &mut state,
            Msg::LoginCompleted(Err(crate::core::error::AppError::Api(
                "Invalid credentials".to_string(),
            ))),
        );

        assert!(effects.is_empty());
        assert!(state.session.is_none());
        assert_eq!(state.page, Page::Login);
        assert_eq!(
            state.notice,
            Some(Notice::Error("Invalid credentials".to_string()))
        );
    }

    #[test]
    fn register_toggle_is_local_only() {
        let mut state = AppState::new(None);
        assert!(update(&mut state, Msg::ShowRegister).is_empty());
        assert_eq!(state.page, Page::Register);
        assert!(update(&mut state, Msg::ShowLogin).is_empty());
        assert_eq!(state.page, Page::Login);
    }

    #[test]
    fn mismatched_passwords_never_reach_the_network() {
        let mut state = AppState::new(None);
        let effects = update(
            &mut state,
            Msg::RegisterSubmitted(register_form("hunter22", "hunter23")),
        );

        assert!(effects.is_empty());
        assert_eq!(
            state.notice,
            Some(Notice::Warning("Passwords do not match!".to_string()))
        );
    }

    #[test]
    fn short_password_never_reaches_the_network() {
        let mut state = AppState::new(None);
        let effects = update(
            &mut state,
            Msg::RegisterSubmitted(register_form("abc12", "abc12")),
        );

        assert!(effects.is_empty());
        assert_eq!(
            state.notice,
            Some(Notice::Warning(
                "Password must be at least 6 characters!".to_string()
            ))
        );
    }

    #[test]
    fn valid_registration_emits_register_effect() {
        let mut state = AppState::new(None);
        let effects = update(
            &mut state,
            Msg::RegisterSubmitted(register_form("hunter22", "hunter22")),
        );
        assert!(matches!(effects.as_slice(), [Effect::Register(_)]));
    }

    #[test]
    fn successful_registration_returns_to_login() {
        let mut state = AppState::new(None);
        state.page = Page::Register;
        update(&mut state, Msg::RegisterCompleted(Ok(())));

        assert_eq!(state.page, Page::Login);
        assert_eq!(
            state.notice,
            Some(Notice::Info("Registration successful! Please login.".to_string()))
        );
    }

    #[test]
    fn logout_clears_session_and_collections() {
        let mut state = authed(Role::Lecturer);
        state.ratings = vec![];
        let effects = update(&mut state, Msg::LoggedOut);

        assert!(state.session.is_none());
        assert_eq!(state.page, Page::Login);
        assert!(state.reports.is_empty());
        assert!(state.ratings.is_empty());
        assert!(matches!(effects.as_slice(), [Effect::ClearSession]));
    }

    // ------------------------------------------------------------ navigation

    #[test]
    fn navigation_to_reports_fetches_with_current_term() {
        let mut state = authed(Role::Student);
        state.search_term = "java".to_string();
        let effects = update(&mut state, Msg::NavigatedTo(Page::Reports));

        assert!(state.loading);
        match effects.as_slice() {
            [Effect::FetchReports { search }] => assert_eq!(search, "java"),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn navigation_to_rating_fetches_ratings() {
        let mut state = authed(Role::Student);
        let effects = update(&mut state, Msg::NavigatedTo(Page::Rating));
        assert!(matches!(effects.as_slice(), [Effect::FetchRatings]));
    }

    #[test]
    fn navigation_requires_a_session() {
        let mut state = AppState::new(None);
        let effects = update(&mut state, Msg::NavigatedTo(Page::Dashboard));
        assert!(effects.is_empty());
        assert_eq!(state.page, Page::Login);
    }

    #[test]
    fn login_pages_unreachable_while_authenticated() {
        let mut state = authed(Role::Student);
        assert!(update(&mut state, Msg::NavigatedTo(Page::Login)).is_empty());
        assert_eq!(state.page, Page::Dashboard);
    }

    // ---------------------------------------------------------------- search

    #[test]
    fn search_on_reports_page_arms_the_debounce() {
        let mut state = authed(Role::Student);
        state.page = Page::Reports;
        let effects = update(&mut state, Msg::SearchChanged("java".to_string()));

        assert_eq!(state.search_term, "java");
        assert!(matches!(effects.as_slice(), [Effect::ArmSearchDebounce]));
    }

    #[test]
    fn search_off_reports_page_does_not_arm() {
        let mut state = authed(Role::Student);
        let effects = update(&mut state, Msg::SearchChanged("java".to_string()));
        assert!(effects.is_empty());
    }

    #[test]
    fn debounce_expiry_fetches_with_final_term() {
        let mut state = authed(Role::Student);
        state.page = Page::Reports;
        for term in ["j", "ja", "jav", "java"] {
            update(&mut state, Msg::SearchChanged(term.to_string()));
        }
        let effects = update(&mut state, Msg::SearchDebounceElapsed);

        match effects.as_slice() {
            [Effect::FetchReports { search }] => assert_eq!(search, "java"),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn stale_debounce_expiry_is_ignored_after_navigation() {
        let mut state = authed(Role::Student);
        state.page = Page::Reports;
        update(&mut state, Msg::SearchChanged("java".to_string()));
        update(&mut state, Msg::NavigatedTo(Page::Classes));
        let effects = update(&mut state, Msg::SearchDebounceElapsed);
        assert!(effects.is_empty());
    }

    // ------------------------------------------------------------ new report

    fn filled_draft() -> ReportDraft {
        let mut draft = ReportDraft::default();
        for field in ReportDraft::FIELDS {
            if draft.get_field(field).map(str::is_empty).unwrap_or(false) {
                draft.set_field(field, "filled");
            }
        }
        draft
    }

    #[test]
    fn incomplete_draft_is_rejected_locally() {
        let mut state = authed(Role::Lecturer);
        let effects = update(&mut state, Msg::ReportSubmitted);
        assert!(effects.is_empty());
        assert!(matches!(state.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn complete_draft_is_submitted() {
        let mut state = authed(Role::Lecturer);
        state.draft = filled_draft();
        let effects = update(&mut state, Msg::ReportSubmitted);
        assert!(matches!(effects.as_slice(), [Effect::CreateReport(_)]));
        assert!(state.loading);
    }

    #[test]
    fn successful_submission_resets_draft_and_refetches() {
        let mut state = authed(Role::Lecturer);
        state.page = Page::NewReport;
        state.draft = filled_draft();
        let effects = update(&mut state, Msg::ReportCreated(Ok(())));

        assert_eq!(state.draft, ReportDraft::default());
        assert_eq!(state.draft.faculty, "Faculty of ICT");
        assert_eq!(state.draft.registered, "30");
        assert_eq!(state.page, Page::Reports);
        assert!(matches!(effects.as_slice(), [Effect::FetchReports { .. }]));
    }

    #[test]
    fn failed_submission_keeps_the_draft() {
        let mut state = authed(Role::Lecturer);
        state.draft = filled_draft();
        let draft_before = state.draft.clone();
        update(
            &mut state,
            Msg::ReportCreated(Err(crate::core::error::AppError::Api("nope".to_string()))),
        );

        assert_eq!(state.draft, draft_before);
        assert!(matches!(state.notice, Some(Notice::Error(_))));
    }

    // ---------------------------------------------------------------- review

    #[test]
    fn approve_emits_fixed_feedback_for_prl_on_pending() {
        let mut state = authed(Role::Prl);
        let effects = update(
            &mut state,
            Msg::ApproveRequested {
                report_id: "1".to_string(),
            },
        );

        match effects.as_slice() {
            [Effect::SendFeedback {
                report_id,
                feedback,
                status,
            }] => {
                assert_eq!(report_id, "1");
                assert_eq!(feedback, "Approved");
                assert_eq!(*status, ReportStatus::Approved);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn approve_is_unreachable_for_other_roles() {
        let mut state = authed(Role::Lecturer);
        let effects = update(
            &mut state,
            Msg::ApproveRequested {
                report_id: "1".to_string(),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn approve_is_unreachable_once_status_changed() {
        let mut state = authed(Role::Prl);
        let effects = update(
            &mut state,
            Msg::ApproveRequested {
                report_id: "2".to_string(),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn reject_first_prompts_for_a_reason() {
        let mut state = authed(Role::Prl);
        let effects = update(
            &mut state,
            Msg::RejectRequested {
                report_id: "1".to_string(),
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [Effect::PromptRejectReason { .. }]
        ));
    }

    #[test]
    fn cancelled_reject_reason_sends_nothing() {
        let mut state = authed(Role::Prl);
        update(
            &mut state,
            Msg::RejectRequested {
                report_id: "1".to_string(),
            },
        );

        for reason in [None, Some(String::new())] {
            let effects = update(
                &mut state,
                Msg::RejectReasonProvided {
                    report_id: "1".to_string(),
                    reason,
                },
            );
            assert!(effects.is_empty());
            assert!(!state.loading);
        }
        assert_eq!(state.reports[0].status, ReportStatus::Pending);
    }

    #[test]
    fn provided_reject_reason_is_sent_verbatim() {
        let mut state = authed(Role::Prl);
        let effects = update(
            &mut state,
            Msg::RejectReasonProvided {
                report_id: "1".to_string(),
                reason: Some("Attendance figures missing".to_string()),
            },
        );

        match effects.as_slice() {
            [Effect::SendFeedback {
                feedback, status, ..
            }] => {
                assert_eq!(feedback, "Attendance figures missing");
                assert_eq!(*status, ReportStatus::Rejected);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn feedback_success_refetches_reports() {
        let mut state = authed(Role::Prl);
        let effects = update(
            &mut state,
            Msg::FeedbackSent {
                status: ReportStatus::Approved,
                result: Ok(()),
            },
        );
        assert!(matches!(effects.as_slice(), [Effect::FetchReports { .. }]));
        assert_eq!(
            state.notice,
            Some(Notice::Info("Report approved!".to_string()))
        );
    }

    // --------------------------------------------------------------- ratings

    #[test]
    fn rating_without_selection_or_stars_stays_local() {
        let mut state = authed(Role::Student);

        let effects = update(&mut state, Msg::RatingSubmitted);
        assert!(effects.is_empty());

        update(&mut state, Msg::RatingStarsSet(4));
        state.rating_form.selected_report = None;
        assert!(update(&mut state, Msg::RatingSubmitted).is_empty());

        state.rating_form.stars = 0;
        state.rating_form.selected_report = Some("1".to_string());
        assert!(update(&mut state, Msg::RatingSubmitted).is_empty());
        assert!(matches!(state.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn complete_rating_is_submitted_and_reset_on_success() {
        let mut state = authed(Role::Student);
        update(&mut state, Msg::RatingReportSelected(Some("1".to_string())));
        update(&mut state, Msg::RatingStarsSet(5));
        update(
            &mut state,
            Msg::RatingCommentChanged("Great session".to_string()),
        );

        let effects = update(&mut state, Msg::RatingSubmitted);
        match effects.as_slice() {
            [Effect::SubmitRating(request)] => {
                assert_eq!(request.report_id, "1");
                assert_eq!(request.rating, 5);
                assert_eq!(request.comment, "Great session");
            }
            other => panic!("unexpected effects: {other:?}"),
        }

        let effects = update(&mut state, Msg::RatingSaved(Ok(())));
        assert_eq!(state.rating_form, RatingForm::default());
        assert!(matches!(effects.as_slice(), [Effect::FetchRatings]));
    }

    #[test]
    fn out_of_range_stars_are_rejected() {
        let mut state = authed(Role::Student);
        update(&mut state, Msg::RatingStarsSet(6));
        assert_eq!(state.rating_form.stars, 0);
        assert!(matches!(state.notice, Some(Notice::Warning(_))));
    }

    // ------------------------------------------------- classes and monitoring

    #[test]
    fn classes_fetch_failure_falls_back_to_builtin_roster() {
        let mut state = authed(Role::Student);
        update(
            &mut state,
            Msg::ClassesLoaded(Err(crate::core::error::AppError::Api("404".to_string()))),
        );
        assert_eq!(state.classes.len(), 2);
        assert_eq!(state.classes[0].name, "DIT 1A");
    }

    #[test]
    fn activities_fetch_failure_falls_back_to_builtin_feed() {
        let mut state = authed(Role::Student);
        update(
            &mut state,
            Msg::ActivitiesLoaded(Err(crate::core::error::AppError::Api("404".to_string()))),
        );
        assert_eq!(state.activities.len(), 2);
    }

    // ---------------------------------------------------------------- export

    #[test]
    fn export_success_only_clears_loading() {
        let mut state = authed(Role::Student);
        update(&mut state, Msg::ExportRequested);
        assert!(state.loading);

        let notice_before = state.notice.clone();
        let effects = update(
            &mut state,
            Msg::ExportCompleted(Ok(std::path::PathBuf::from("reports_2026-08-07.xlsx"))),
        );
        assert!(effects.is_empty());
        assert!(!state.loading);
        assert_eq!(state.notice, notice_before);
    }

    #[test]
    fn export_failure_surfaces_fixed_message() {
        let mut state = authed(Role::Student);
        update(&mut state, Msg::ExportRequested);
        update(
            &mut state,
            Msg::ExportCompleted(Err(crate::core::error::AppError::ExportFailed)),
        );
        assert!(!state.loading);
        assert_eq!(state.notice, Some(Notice::Error("Export failed".to_string())));
    }
}
