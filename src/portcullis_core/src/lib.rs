pub mod domain;
pub mod http_abstraction;
pub mod outcome;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    flash::FlashPayload,
    password::Password,
    password_digest::PasswordDigest,
    session::{Session, SessionId, SessionRecord, SessionRecordError, SessionUser},
    user::{NewUser, User, UserError, UserId},
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError},
};

pub use outcome::{
    Access, Denial, FlowOutcome, INVALID_CREDENTIALS_MESSAGE, INVALID_INPUT_MESSAGE,
    RedirectTarget, RejectionReason, USER_EXISTS_MESSAGE, ViewerContext,
};

pub use validation::{
    LoginCredentials, LoginForm, MIN_PASSWORD_LENGTH, SignupForm, ValidatedSignup,
    ValidationError, validate_login, validate_signup,
};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};
