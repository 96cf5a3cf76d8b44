//! Terminal results of the authentication flows and the authorization gate.
//!
//! Each flow returns exactly one of these values, and the web layer turns it
//! into exactly one response.

use crate::validation::ValidationError;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input - please check your inputs.";
pub const USER_EXISTS_MESSAGE: &str =
    "User exist already, use another email or sign in with existing email address";
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Could not logged you in - Please check your credentials!";

/// Where the client is sent after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Home,
    SignupForm,
    LoginForm,
    Profile,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Home => "/",
            RedirectTarget::SignupForm => "/signup",
            RedirectTarget::LoginForm => "/login",
            RedirectTarget::Profile => "/profile",
        }
    }
}

/// Why a submission was turned away. These are recovered locally through
/// the flash channel and never become errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    InvalidInput(ValidationError),
    /// The email is already registered.
    Conflict,
    /// Unknown email or wrong password; deliberately indistinguishable.
    CredentialMismatch,
}

impl RejectionReason {
    /// The text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::InvalidInput(_) => INVALID_INPUT_MESSAGE,
            RejectionReason::Conflict => USER_EXISTS_MESSAGE,
            RejectionReason::CredentialMismatch => INVALID_CREDENTIALS_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Rejected {
        reason: RejectionReason,
        redirect: RedirectTarget,
    },
    Success {
        redirect: RedirectTarget,
    },
}

impl FlowOutcome {
    pub fn redirect(&self) -> RedirectTarget {
        match self {
            FlowOutcome::Rejected { redirect, .. } | FlowOutcome::Success { redirect } => *redirect,
        }
    }
}

/// Why a protected resource was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Unauthorized,
    Forbidden,
}

impl Denial {
    pub fn status_code(&self) -> u16 {
        match self {
            Denial::Unauthorized => 401,
            Denial::Forbidden => 403,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny(Denial),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Navigation flags exposed to every rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerContext {
    pub is_authenticated: bool,
    pub is_admin: bool,
}
