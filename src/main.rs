mod core;
mod features;
mod modules;
mod shared;
mod shell;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::Config;
use crate::core::http::ApiClient;
use crate::features::auth::{AuthApi, SessionStore};
use crate::features::classes::ClassesApi;
use crate::features::dashboard::DashboardApi;
use crate::features::monitoring::MonitoringApi;
use crate::features::ratings::RatingsApi;
use crate::features::reports::ReportsApi;
use crate::modules::storage::{FileStore, KeyValueStore};
use crate::shell::console::{self, Command};
use crate::shell::msg::Msg;
use crate::shell::view::view;
use crate::shell::{ShellDeps, ShellRuntime};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout belongs to the rendered pages.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    let store: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(&config.session_store.path).map_err(|e| anyhow::anyhow!(e.to_string()))?,
    );
    let sessions = SessionStore::new(store.clone());
    let api = ApiClient::new(&config.api, store).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(base_url = %config.api.base_url, "API client ready");

    let restored = sessions
        .restore()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    if let Some(session) = &restored {
        tracing::info!(user = %session.user.email, "Restored saved session");
    }

    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Msg>();
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    let prompter = console::spawn_stdin_reader(line_tx);

    let deps = ShellDeps {
        auth: Arc::new(AuthApi::new(api.clone(), sessions.clone())),
        reports: Arc::new(ReportsApi::new(api.clone(), &config.export)),
        ratings: Arc::new(RatingsApi::new(api.clone())),
        classes: Arc::new(ClassesApi::new(api.clone())),
        monitoring: Arc::new(MonitoringApi::new(api.clone())),
        dashboard: Arc::new(DashboardApi::new(api)),
        sessions,
        prompter: Box::new(prompter),
    };
    let mut shell = ShellRuntime::new(deps, msg_tx, restored);

    println!("{}", console::render(&view(shell.state())));
    loop {
        tokio::select! {
            line = line_rx.recv() => {
                let Some(line) = line else { break };
                match console::parse(&line, shell.state()) {
                    Command::Dispatch(msg) => shell.dispatch(msg),
                    Command::Help => {
                        println!("{}", console::HELP);
                        continue;
                    }
                    Command::Quit => break,
                    Command::Invalid(usage) => {
                        println!("{}", usage);
                        continue;
                    }
                    Command::Noop => continue,
                }
            }
            msg = msg_rx.recv() => {
                let Some(msg) = msg else { break };
                shell.dispatch(msg);
            }
        }
        println!("{}", console::render(&view(shell.state())));
    }

    Ok(())
}
