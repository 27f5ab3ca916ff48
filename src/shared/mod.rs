pub mod constants;
pub mod serde_helpers;
