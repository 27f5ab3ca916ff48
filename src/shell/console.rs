use std::io::BufRead;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::features::auth::dtos::RegisterForm;
use crate::features::auth::models::Role;
use crate::shell::msg::Msg;
use crate::shell::runtime::PromptPort;
use crate::shell::state::{AppState, Notice, Page};
use crate::shell::view::{PageView, ViewModel};

// ============================================================================
// Command parsing
// ============================================================================

#[derive(Debug)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Invalid(String),
    Noop,
}

/// Maps one input line to a shell message. The console stays dumb: no
/// role or page gating happens here beyond picking the right message.
pub fn parse(line: &str, state: &AppState) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Noop;
    }

    let mut parts = line.splitn(2, ' ');
    let verb = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default().trim();

    match verb {
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "login" => parse_login(rest),
        "register" => parse_register(rest, state),
        "back" => {
            if state.session.is_some() {
                Command::Dispatch(Msg::DetailClosed)
            } else {
                Command::Dispatch(Msg::ShowLogin)
            }
        }
        "logout" => Command::Dispatch(Msg::LoggedOut),
        "goto" => Command::Dispatch(Msg::NavigatedTo(parse_page(rest))),
        "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "set" => {
            let mut args = rest.splitn(2, ' ');
            match args.next().filter(|f| !f.is_empty()) {
                Some(field) => Command::Dispatch(Msg::DraftFieldChanged {
                    field: field.to_string(),
                    value: args.next().unwrap_or_default().trim().to_string(),
                }),
                None => Command::Invalid("usage: set <field> <value>".to_string()),
            }
        }
        "submit" => Command::Dispatch(Msg::ReportSubmitted),
        "approve" => match non_empty(rest) {
            Some(report_id) => Command::Dispatch(Msg::ApproveRequested { report_id }),
            None => Command::Invalid("usage: approve <report-id>".to_string()),
        },
        "reject" => match non_empty(rest) {
            Some(report_id) => Command::Dispatch(Msg::RejectRequested { report_id }),
            None => Command::Invalid("usage: reject <report-id>".to_string()),
        },
        "select" => Command::Dispatch(Msg::RatingReportSelected(non_empty(rest))),
        "stars" => match rest.parse::<u8>() {
            Ok(stars) => Command::Dispatch(Msg::RatingStarsSet(stars)),
            Err(_) => Command::Invalid("usage: stars <1-5>".to_string()),
        },
        "comment" => Command::Dispatch(Msg::RatingCommentChanged(rest.to_string())),
        "rate" => Command::Dispatch(Msg::RatingSubmitted),
        "export" => Command::Dispatch(Msg::ExportRequested),
        "inspect" => match non_empty(rest) {
            Some(report_id) => Command::Dispatch(Msg::InspectRequested { report_id }),
            None => Command::Invalid("usage: inspect <report-id>".to_string()),
        },
        "sidebar" => Command::Dispatch(Msg::SidebarToggled),
        "health" => Command::Dispatch(Msg::HealthRequested),
        "stats" => Command::Dispatch(Msg::StatsRequested),
        other => Command::Invalid(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_login(rest: &str) -> Command {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    match parts.as_slice() {
        [email, password, role] => match Role::from_str(role) {
            Ok(role) => Command::Dispatch(Msg::LoginSubmitted {
                email: email.to_string(),
                password: password.to_string(),
                role,
            }),
            Err(e) => Command::Invalid(e),
        },
        _ => Command::Invalid("usage: login <email> <password> <role>".to_string()),
    }
}

fn parse_register(rest: &str, state: &AppState) -> Command {
    if rest.is_empty() {
        // Bare `register` flips to the registration view.
        return Command::Dispatch(Msg::ShowRegister);
    }

    if state.page != Page::Register {
        return Command::Invalid("type 'register' first to open the registration form".to_string());
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() < 5 {
        return Command::Invalid(
            "usage: register <email> <password> <confirm> <role> <full name>".to_string(),
        );
    }

    let role = match Role::from_str(parts[3]) {
        Ok(role) => Some(role),
        Err(e) => return Command::Invalid(e),
    };

    Command::Dispatch(Msg::RegisterSubmitted(RegisterForm {
        email: parts[0].to_string(),
        password: parts[1].to_string(),
        confirm_password: parts[2].to_string(),
        role,
        name: parts[4..].join(" "),
    }))
}

fn parse_page(name: &str) -> Page {
    match name.trim().to_lowercase().as_str() {
        "dashboard" => Page::Dashboard,
        "reports" => Page::Reports,
        "new" | "newreport" | "new-report" => Page::NewReport,
        "classes" => Page::Classes,
        "monitoring" => Page::Monitoring,
        "rating" | "ratings" => Page::Rating,
        _ => Page::Other,
    }
}

pub const HELP: &str = "\
Commands:
  login <email> <password> <role>        sign in (role: student|lecturer|prl|pl)
  register                               open the registration form
  register <email> <pw> <confirm> <role> <full name>
  logout                                 sign out
  goto <page>                            dashboard|reports|new|classes|monitoring|rating
  search [term]                          filter reports (empty clears)
  set <field> <value>                    edit the report form (goto new to see fields)
  submit                                 submit the report form
  approve <id> / reject <id>             review a pending report
  select <id> / stars <1-5> / comment <text> / rate
  inspect <id>                           show one report with its ratings
  export                                 download the reports spreadsheet
  sidebar / health / stats / back / quit";

// ============================================================================
// Rendering
// ============================================================================

/// Draws one frame of the view description as plain text.
pub fn render(vm: &ViewModel) -> String {
    let mut out = String::new();

    if let Some(chrome) = &vm.chrome {
        out.push_str(&format!(
            "== LUCT SYSTEM | {} | {} ({}){} ==\n",
            chrome.active.title(),
            chrome.user_name,
            chrome.role.label(),
            if vm.loading { " | loading..." } else { "" },
        ));
        if chrome.sidebar_open {
            let menu: Vec<String> = chrome
                .menu
                .iter()
                .map(|item| {
                    if item.page == chrome.active {
                        format!("[{}]", item.label)
                    } else {
                        item.label.to_string()
                    }
                })
                .collect();
            out.push_str(&format!("   {}\n", menu.join("  ")));
        }
    } else {
        out.push_str("== LUCT — Faculty Reporting System ==\n");
    }

    if let Some(notice) = &vm.notice {
        let prefix = match notice {
            Notice::Info(_) => "*",
            Notice::Warning(_) => "!",
            Notice::Error(_) => "!!",
        };
        out.push_str(&format!("{} {}\n", prefix, notice.text()));
    }

    out.push('\n');
    render_body(&mut out, &vm.body);

    if let Some(detail) = &vm.detail {
        out.push_str("\n--- Report detail ---\n");
        render_card(&mut out, &detail.report);
        match detail.average {
            Some(average) => out.push_str(&format!("Average rating: {:.1}\n", average)),
            None => out.push_str("Average rating: n/a\n"),
        }
        for line in &detail.ratings {
            out.push_str(&format!(
                "  {} {}/5 by {}\n",
                line.stars, line.rating, line.author
            ));
        }
        out.push_str("(back to dismiss)\n");
    }

    out
}

fn render_body(out: &mut String, body: &PageView) {
    match body {
        PageView::Login => {
            out.push_str("Sign in with: login <email> <password> <role>\n");
            out.push_str("No account? Type: register\n");
        }
        PageView::Register => {
            out.push_str("Create New Account\n");
            out.push_str("register <email> <password> <confirm> <role> <full name>\n");
            out.push_str("Already have an account? Type: back\n");
        }
        PageView::Dashboard(dashboard) => {
            out.push_str(&format!(
                "  Total: {}  Approved: {}  Pending: {}  Rejected: {}\n",
                dashboard.stats.total,
                dashboard.stats.approved,
                dashboard.stats.pending,
                dashboard.stats.rejected,
            ));
            out.push_str("Recent Activity\n");
            if dashboard.recent.is_empty() {
                out.push_str("  No reports yet\n");
            }
            for card in &dashboard.recent {
                out.push_str(&format!(
                    "  {} — {} • {} [{}]\n",
                    card.course_name, card.lecturer_name, card.date, card.status
                ));
            }
        }
        PageView::Reports(reports) => {
            out.push_str(&format!("Reports (search: '{}')\n", reports.search_term));
            if reports.can_create {
                out.push_str("  (goto new to file a report)\n");
            }
            if reports.rows.is_empty() {
                out.push_str("  No reports found\n");
            }
            for card in &reports.rows {
                render_card(out, card);
            }
        }
        PageView::NewReport(form) => {
            out.push_str("New Report — set <field> <value>, then submit\n");
            for field in crate::features::reports::dtos::ReportDraft::FIELDS {
                let value = form.draft.get_field(field).unwrap_or_default();
                out.push_str(&format!("  {:<16} {}\n", field, value));
            }
        }
        PageView::Classes(classes) => {
            out.push_str(&format!(
                "  Total: {}  Students: {}  Avg size: {}\n",
                classes.stats.total_classes,
                classes.stats.total_students,
                classes.stats.average_class_size,
            ));
            for class in &classes.classes {
                out.push_str(&format!(
                    "  {} [{}] — {} | {} students | {}\n",
                    class.name,
                    class.program.as_deref().unwrap_or("-"),
                    class.lecturer.as_deref().unwrap_or("-"),
                    class.students.unwrap_or(0),
                    class.room.as_deref().unwrap_or("-"),
                ));
            }
        }
        PageView::Monitoring(monitoring) => {
            out.push_str(&format!(
                "  Activities: {}  Approvals: {}  New Reports: {}  Ratings: {}\n",
                monitoring.counts.total,
                monitoring.counts.approvals,
                monitoring.counts.new_reports,
                monitoring.counts.ratings,
            ));
            for line in &monitoring.feed {
                out.push_str(&format!(
                    "  {} {} — {} - {} ({})\n",
                    line.icon, line.user, line.action, line.course, line.time
                ));
            }
        }
        PageView::Rating(rating) => {
            out.push_str(&format!(
                "  Average: {} ⭐  Total: {}  Positive: {}  Reports: {}\n",
                rating.summary.average_display(),
                rating.summary.total,
                rating.summary.positive,
                rating.report_count,
            ));
            out.push_str("Submit Rating — select <id>, stars <1-5>, comment <text>, rate\n");
            for (id, label) in &rating.options {
                let marker = if rating.form.selected_report.as_deref() == Some(id.as_str()) {
                    ">"
                } else {
                    " "
                };
                out.push_str(&format!(" {} {:>4}  {}\n", marker, id, label));
            }
            out.push_str(&format!(
                "  stars: {}  comment: '{}'\n",
                rating.form.stars, rating.form.comment
            ));
            out.push_str("All Ratings\n");
            if rating.entries.is_empty() {
                out.push_str("  No ratings yet\n");
            }
            for entry in &rating.entries {
                out.push_str(&format!(
                    "  {} — {} {}/5 by {}{}\n",
                    entry.course_name,
                    entry.stars,
                    entry.rating,
                    entry.author,
                    entry
                        .date
                        .as_deref()
                        .map(|d| format!(" on {}", d))
                        .unwrap_or_default(),
                ));
                if let Some(comment) = &entry.comment {
                    out.push_str(&format!("      \"{}\"\n", comment));
                }
            }
        }
        PageView::UnderDevelopment(text) => {
            out.push_str(&format!("{}\n", text));
        }
    }
}

fn render_card(out: &mut String, card: &crate::shell::view::ReportCard) {
    out.push_str(&format!(
        "  #{} {} ({} • {}) [{}]\n",
        card.id, card.course_name, card.course_code, card.class_name, card.status
    ));
    out.push_str(&format!(
        "      Week {} | {} | Attendance {} | {}\n",
        card.week, card.date, card.attendance, card.venue
    ));
    if !card.topic.is_empty() {
        out.push_str(&format!("      Topic: {}\n", card.topic));
    }
    if !card.outcomes.is_empty() {
        out.push_str(&format!("      Outcomes: {}\n", card.outcomes));
    }
    if !card.recommendations.is_empty() {
        out.push_str(&format!("      Recommendations: {}\n", card.recommendations));
    }
    if card.offer_review {
        out.push_str(&format!(
            "      (approve {0} / reject {0})\n",
            card.id
        ));
    }
}

// ============================================================================
// Prompt port
// ============================================================================

/// Console prompt for the reject reason. While a prompt is open, the stdin
/// reader routes the next line here instead of the command channel.
pub struct ConsolePrompt {
    route_to_prompt: Arc<AtomicBool>,
    answers: std::sync::mpsc::Receiver<String>,
}

impl PromptPort for ConsolePrompt {
    fn prompt(&mut self, message: &str) -> Option<String> {
        println!("{} (empty line cancels)", message);
        self.route_to_prompt.store(true, Ordering::SeqCst);
        let answer = self.answers.recv().ok();
        self.route_to_prompt.store(false, Ordering::SeqCst);
        answer.map(|line| line.trim().to_string())
    }
}

/// Starts the stdin reader thread and returns the prompt port wired to it.
/// Commands land on `lines`; while a prompt is open the next line answers it.
pub fn spawn_stdin_reader(lines: UnboundedSender<String>) -> ConsolePrompt {
    let route_to_prompt = Arc::new(AtomicBool::new(false));
    let (answer_tx, answer_rx) = std::sync::mpsc::channel::<String>();

    let route = route_to_prompt.clone();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if route.load(Ordering::SeqCst) {
                if answer_tx.send(line).is_err() {
                    break;
                }
            } else if lines.send(line).is_err() {
                break;
            }
        }
    });

    ConsolePrompt {
        route_to_prompt,
        answers: answer_rx,
    }
}
