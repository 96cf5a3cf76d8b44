pub mod session_manager;
pub mod use_cases;

#[cfg(test)]
mod testutil;

pub use session_manager::{SessionError, SessionManager};
pub use use_cases::{
    authorize::{AuthorizationError, AuthorizationGate},
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    signup::{SignupError, SignupUseCase},
};
