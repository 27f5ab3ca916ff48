use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::features::auth::client::AuthApi;
use crate::features::auth::dtos::LoginRequest;
use crate::features::auth::models::Session;
use crate::features::auth::session::SessionStore;
use crate::features::classes::client::ClassesApi;
use crate::features::dashboard::client::DashboardApi;
use crate::features::monitoring::client::MonitoringApi;
use crate::features::ratings::client::RatingsApi;
use crate::features::reports::client::ReportsApi;
use crate::features::reports::dtos::FeedbackRequest;
use crate::shell::debounce::Debouncer;
use crate::shell::msg::{Effect, Msg};
use crate::shell::state::{AppState, ReportDetail};
use crate::shell::update::update;
use crate::shared::constants::SEARCH_DEBOUNCE_MS;

/// Blocking user prompt used by the reject flow. `None` or an empty answer
/// means the user backed out.
pub trait PromptPort: Send {
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Gateway clients and ports the effect runner needs.
pub struct ShellDeps {
    pub auth: Arc<AuthApi>,
    pub reports: Arc<ReportsApi>,
    pub ratings: Arc<RatingsApi>,
    pub classes: Arc<ClassesApi>,
    pub monitoring: Arc<MonitoringApi>,
    pub dashboard: Arc<DashboardApi>,
    pub sessions: SessionStore,
    pub prompter: Box<dyn PromptPort>,
}

/// Drives the reducer: applies each message, then performs the returned
/// effects. API effects run as spawned tasks that post their completion
/// message back through the channel; prompts run inline (they are the one
/// deliberately synchronous interaction).
pub struct ShellRuntime {
    state: AppState,
    deps: ShellDeps,
    tx: UnboundedSender<Msg>,
    debouncer: Debouncer,
}

impl ShellRuntime {
    pub fn new(deps: ShellDeps, tx: UnboundedSender<Msg>, restored: Option<Session>) -> Self {
        Self {
            state: AppState::new(restored),
            deps,
            tx,
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let effects = update(&mut self.state, msg);
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        tracing::debug!(?effect, "Performing effect");
        match effect {
            Effect::Login {
                email,
                password,
                role,
            } => {
                let auth = self.deps.auth.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let request = LoginRequest {
                        email,
                        password,
                        role,
                    };
                    let result = auth.login(&request).await;
                    if let Err(e) = &result {
                        tracing::error!("Login failed: {}", e);
                    }
                    let _ = tx.send(Msg::LoginCompleted(result));
                });
            }
            Effect::Register(request) => {
                let auth = self.deps.auth.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = auth.register(&request).await;
                    if let Err(e) = &result {
                        tracing::error!("Registration failed: {}", e);
                    }
                    let _ = tx.send(Msg::RegisterCompleted(result));
                });
            }
            Effect::ClearSession => {
                if let Err(e) = self.deps.sessions.clear() {
                    tracing::error!("Failed to clear stored session: {}", e);
                }
            }
            Effect::FetchReports { search } => {
                let reports = self.deps.reports.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = reports.list(&search).await;
                    if let Err(e) = &result {
                        tracing::error!("Error loading reports: {}", e);
                    }
                    let _ = tx.send(Msg::ReportsLoaded(result));
                });
            }
            Effect::FetchRatings => {
                let ratings = self.deps.ratings.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = ratings.list().await;
                    if let Err(e) = &result {
                        tracing::error!("Error loading ratings: {}", e);
                    }
                    let _ = tx.send(Msg::RatingsLoaded(result));
                });
            }
            Effect::FetchClasses => {
                let classes = self.deps.classes.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = classes.list().await;
                    if let Err(e) = &result {
                        tracing::debug!("Class list unavailable: {}", e);
                    }
                    let _ = tx.send(Msg::ClassesLoaded(result));
                });
            }
            Effect::FetchActivities => {
                let monitoring = self.deps.monitoring.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = monitoring.activities(None).await;
                    if let Err(e) = &result {
                        tracing::debug!("Activity log unavailable: {}", e);
                    }
                    let _ = tx.send(Msg::ActivitiesLoaded(result));
                });
            }
            Effect::CreateReport(draft) => {
                let reports = self.deps.reports.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = reports.create(&draft).await.map(|_| ());
                    if let Err(e) = &result {
                        tracing::error!("Failed to submit report: {}", e);
                    }
                    let _ = tx.send(Msg::ReportCreated(result));
                });
            }
            Effect::SendFeedback {
                report_id,
                feedback,
                status,
            } => {
                let reports = self.deps.reports.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let request = FeedbackRequest { feedback, status };
                    let result = reports.add_feedback(&report_id, &request).await.map(|_| ());
                    if let Err(e) = &result {
                        tracing::error!("Failed to send feedback: {}", e);
                    }
                    let _ = tx.send(Msg::FeedbackSent { status, result });
                });
            }
            Effect::SubmitRating(request) => {
                let ratings = self.deps.ratings.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = ratings.submit(&request).await.map(|_| ());
                    if let Err(e) = &result {
                        tracing::error!("Failed to submit rating: {}", e);
                    }
                    let _ = tx.send(Msg::RatingSaved(result));
                });
            }
            Effect::ExportReports => {
                let reports = self.deps.reports.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = reports.export_excel().await;
                    if let Err(e) = &result {
                        tracing::error!("Export failed: {}", e);
                    }
                    let _ = tx.send(Msg::ExportCompleted(result));
                });
            }
            Effect::ArmSearchDebounce => {
                let tx = self.tx.clone();
                self.debouncer.arm(move || {
                    let _ = tx.send(Msg::SearchDebounceElapsed);
                });
            }
            Effect::PromptRejectReason { report_id } => {
                let reason = self
                    .deps
                    .prompter
                    .prompt("Please provide a reason for rejection:");
                self.dispatch(Msg::RejectReasonProvided { report_id, reason });
            }
            Effect::InspectReport { report_id } => {
                let reports = self.deps.reports.clone();
                let ratings = self.deps.ratings.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = match reports.get(&report_id).await {
                        Ok(report) => {
                            // The drill-down degrades to an empty rating list
                            // when the rating endpoints have nothing.
                            let report_ratings =
                                ratings.for_report(&report_id).await.unwrap_or_default();
                            let average = ratings.average(&report_id).await.unwrap_or(None);
                            Ok(ReportDetail {
                                report,
                                ratings: report_ratings,
                                average,
                            })
                        }
                        Err(e) => {
                            tracing::error!("Failed to load report {}: {}", report_id, e);
                            Err(e)
                        }
                    };
                    let _ = tx.send(Msg::ReportDetailLoaded(Box::new(result)));
                });
            }
            Effect::CheckHealth => {
                let dashboard = self.deps.dashboard.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = dashboard.health().await;
                    let _ = tx.send(Msg::HealthChecked(result));
                });
            }
            Effect::FetchServerStats => {
                let dashboard = self.deps.dashboard.clone();
                let monitoring = self.deps.monitoring.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = async {
                        let dashboard_stats = dashboard.stats().await?;
                        let monitoring_stats = monitoring.stats().await?;
                        Ok((dashboard_stats, monitoring_stats))
                    }
                    .await;
                    if let Err(e) = &result {
                        tracing::error!("Failed to load server stats: {}", e);
                    }
                    let _ = tx.send(Msg::ServerStatsLoaded(result));
                });
            }
        }
    }
}
