//! Axum route functions.
//!
//! Each one extracts the request head (and the form, where there is one),
//! calls the matching framework-agnostic handler and maps a fatal error to
//! the failure page.

pub mod error;
pub mod login;
pub mod logout;
pub mod pages;
pub mod signup;

pub use error::RouteError;
pub use login::{login, login_page};
pub use logout::logout;
pub use pages::{admin, profile, welcome};
pub use signup::{signup, signup_page};

use axum::{
    Router,
    routing::{get, post},
};
use portcullis_core::{PasswordHasher, SessionStore, UserStore};

use crate::state::AuthState;

/// All page routes, bound to `state`.
pub fn router<U, H, S>(state: AuthState<U, H, S>) -> Router
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    Router::new()
        .route("/", get(welcome::<U, H, S>))
        .route("/signup", get(signup_page::<U, H, S>).post(signup::<U, H, S>))
        .route("/login", get(login_page::<U, H, S>).post(login::<U, H, S>))
        .route("/logout", post(logout::<U, H, S>))
        .route("/profile", get(profile::<U, H, S>))
        .route("/admin", get(admin::<U, H, S>))
        .with_state(state)
}
