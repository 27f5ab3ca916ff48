pub mod client;
pub mod dtos;
pub mod models;
pub mod session;

pub use client::AuthApi;
pub use dtos::{LoginRequest, RegisterForm, RegisterRequest};
pub use models::{Role, Session, User};
pub use session::SessionStore;
