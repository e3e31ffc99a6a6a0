//! Client-side form validation.
//!
//! Forms are validated locally before any service call; backend validation
//! applies independently on top. Required-field and format checks follow
//! the login/register/application flows.

use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Login form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
}

/// Instructor application form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplicationForm {
    #[validate(length(
        min = 30,
        message = "Please describe your motivation in at least 30 characters"
    ))]
    pub motivation: String,
    #[validate(length(min = 1, message = "CV document is required"))]
    pub cv_path: String,
}

/// Validate a form, folding all messages into one validation error
pub fn validate<T: Validate>(form: &T) -> AppResult<()> {
    form.validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_a_required_field_error() {
        let form = LoginForm {
            email: String::new(),
            password: "secret".to_string(),
        };

        let err = validate(&form).unwrap_err();
        assert!(err.user_message().contains("Email is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };

        let err = validate(&form).unwrap_err();
        assert!(err.user_message().contains("Invalid email format"));
    }

    #[test]
    fn short_password_fails_registration() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
            full_name: "Test User".to_string(),
        };

        let err = validate(&form).unwrap_err();
        assert!(err.user_message().contains("at least 8 characters"));
    }

    #[test]
    fn valid_forms_pass() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            password: "longenough".to_string(),
            full_name: "Test User".to_string(),
        };
        assert!(validate(&form).is_ok());
    }
}
