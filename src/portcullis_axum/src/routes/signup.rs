//! Axum signup routes.

use axum::{Form, extract::State, http::request::Parts, response::Response};
use portcullis_adapters::handlers;
use portcullis_core::{PasswordHasher, SessionStore, SignupForm, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::adapters::{AxumRequest, response_builder};
use crate::routes::RouteError;
use crate::state::AuthState;

/// Urlencoded signup submission. Missing fields arrive as empty strings and
/// are rejected by validation, not by the extractor.
#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "confirm-email")]
    pub confirm_email: String,
    #[serde(default)]
    pub password: String,
}

impl From<SignupRequest> for SignupForm {
    fn from(request: SignupRequest) -> Self {
        SignupForm {
            email: request.email,
            confirm_email: request.confirm_email,
            password: Secret::new(request.password),
        }
    }
}

#[tracing::instrument(name = "Signup page", skip_all)]
pub async fn signup_page<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_signup_page(
        &request,
        &state.user_store,
        &state.session_store,
        &state.cookie_name,
        response_builder(),
    )
    .await?)
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
    Form(form): Form<SignupRequest>,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_signup(
        &request,
        &state.user_store,
        &state.hasher,
        &state.session_store,
        &state.cookie_name,
        form.into(),
        response_builder(),
    )
    .await?)
}
