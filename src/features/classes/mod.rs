pub mod client;
pub mod models;

pub use client::ClassesApi;
pub use models::{builtin_roster, class_stats, ClassInfo, ClassStats};
