pub mod client;
pub mod dtos;
pub mod models;

pub use client::RatingsApi;
pub use dtos::SubmitRatingRequest;
pub use models::{course_name_for, star_display, summarize, Rating, RatingSummary};
