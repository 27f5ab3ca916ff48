pub mod client;
pub mod dtos;
pub mod filter;
pub mod models;

pub use client::ReportsApi;
pub use dtos::{FeedbackRequest, ReportDraft};
pub use models::{Report, ReportStatus};
