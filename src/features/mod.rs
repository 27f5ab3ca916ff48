pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod monitoring;
pub mod ratings;
pub mod reports;
