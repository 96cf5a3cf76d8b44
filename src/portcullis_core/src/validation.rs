//! Syntactic checks on signup and login submissions.
//!
//! Everything here is pure: no store is consulted, so whether an account
//! exists or a password is right is decided elsewhere.

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use crate::domain::{email::Email, password::Password};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("Email and confirmation do not match")]
    EmailMismatch,
    #[error("Email must contain '@'")]
    MissingSeparator,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

/// Raw signup submission (`email`, `confirm-email`, `password`).
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub email: String,
    pub confirm_email: String,
    pub password: Secret<String>,
}

impl SignupForm {
    /// Values to re-populate the form with after a rejection.
    pub fn echoed_fields(&self) -> [(&'static str, String); 3] {
        [
            ("email", self.email.clone()),
            ("confirmEmail", self.confirm_email.clone()),
            ("password", self.password.expose_secret().clone()),
        ]
    }
}

/// Raw login submission (`email`, `password`).
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: Secret<String>,
}

impl LoginForm {
    pub fn echoed_fields(&self) -> [(&'static str, String); 2] {
        [
            ("email", self.email.clone()),
            ("password", self.password.expose_secret().clone()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedSignup {
    pub email: Email,
    pub password: Password,
}

#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: Email,
    pub password: Password,
}

pub fn validate_signup(form: &SignupForm) -> Result<ValidatedSignup, ValidationError> {
    let email = Email::try_from(form.email.as_str())
        .map_err(|_| ValidationError::EmptyField("email"))?;
    if form.confirm_email.is_empty() {
        return Err(ValidationError::EmptyField("confirm-email"));
    }
    let password = Password::try_from(form.password.clone())
        .map_err(|_| ValidationError::EmptyField("password"))?;

    // Length is taken on the untrimmed value.
    if password.char_count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if email.as_str() != form.confirm_email {
        return Err(ValidationError::EmailMismatch);
    }
    if !email.has_separator() {
        return Err(ValidationError::MissingSeparator);
    }

    Ok(ValidatedSignup { email, password })
}

pub fn validate_login(form: &LoginForm) -> Result<LoginCredentials, ValidationError> {
    let email = Email::try_from(form.email.as_str())
        .map_err(|_| ValidationError::EmptyField("email"))?;
    let password = Password::try_from(form.password.clone())
        .map_err(|_| ValidationError::EmptyField("password"))?;

    Ok(LoginCredentials { email, password })
}
