//! Axum login routes.

use axum::{Form, extract::State, http::request::Parts, response::Response};
use portcullis_adapters::handlers;
use portcullis_core::{LoginForm, PasswordHasher, SessionStore, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::adapters::{AxumRequest, response_builder};
use crate::routes::RouteError;
use crate::state::AuthState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginRequest> for LoginForm {
    fn from(request: LoginRequest) -> Self {
        LoginForm {
            email: request.email,
            password: Secret::new(request.password),
        }
    }
}

#[tracing::instrument(name = "Login page", skip_all)]
pub async fn login_page<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_login_page(
        &request,
        &state.user_store,
        &state.session_store,
        &state.cookie_name,
        response_builder(),
    )
    .await?)
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
    Form(form): Form<LoginRequest>,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_login(
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
