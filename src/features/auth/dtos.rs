use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};
use crate::features::auth::models::{Role, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Raw registration input as entered by the user. All checks run locally
/// before any network call is made.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters!"))]
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

impl RegisterForm {
    /// Runs the local checks and produces the request payload. The
    /// confirmation-equality check runs first, then the derive checks, so the
    /// surfaced message matches what the user most recently typed wrong.
    pub fn validated(&self) -> Result<RegisterRequest> {
        if self.password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match!".to_string()));
        }

        self.validate()
            .map_err(|errors| AppError::Validation(first_message(&errors)))?;

        let role = self
            .role
            .ok_or_else(|| AppError::Validation("Choose your role".to_string()))?;

        Ok(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            role,
        })
    }
}

/// Picks one message out of the derive errors, preferring the password check
/// so the strongest requirement is what the user sees.
fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    for field in ["password", "name", "email"] {
        if let Some(list) = fields.get(field) {
            if let Some(message) = list.iter().find_map(|e| e.message.as_ref()) {
                return message.to_string();
            }
        }
    }
    "Invalid input".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            name: "Thabo Mokoena".to_string(),
            email: "thabo@luct.ac.ls".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            role: Some(Role::Lecturer),
        }
    }

    #[test]
    fn valid_form_produces_request() {
        let request = valid_form().validated().unwrap();
        assert_eq!(request.email, "thabo@luct.ac.ls");
        assert_eq!(request.role, Role::Lecturer);
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut form = valid_form();
        form.confirm_password = "hunter23".to_string();
        let err = form.validated().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match!");
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = valid_form();
        form.password = "abc12".to_string();
        form.confirm_password = "abc12".to_string();
        let err = form.validated().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters!");
    }

    #[test]
    fn missing_role_is_rejected() {
        let mut form = valid_form();
        form.role = None;
        assert!(form.validated().is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = valid_form();
        form.name.clear();
        let err = form.validated().unwrap_err();
        assert_eq!(err.to_string(), "Full name is required");
    }
}
