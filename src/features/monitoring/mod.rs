pub mod client;
pub mod models;

pub use client::MonitoringApi;
pub use models::{activity_counts, builtin_feed, ActivityCounts, ActivityEntry, ActivityKind};
