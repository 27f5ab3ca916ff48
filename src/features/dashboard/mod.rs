pub mod client;
pub mod stats;

pub use client::DashboardApi;
pub use stats::{status_counts, StatusCounts};
