//! Read-only pages: welcome, profile and admin.

use axum::{extract::State, http::request::Parts, response::Response};
use portcullis_adapters::handlers;
use portcullis_core::{PasswordHasher, SessionStore, UserStore};

use crate::adapters::{AxumRequest, response_builder};
use crate::routes::RouteError;
use crate::state::AuthState;

#[tracing::instrument(name = "Welcome page", skip_all)]
pub async fn welcome<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_welcome_page(
        &request,
        &state.user_store,
        &state.session_store,
        &state.cookie_name,
        response_builder(),
    )
    .await?)
}

#[tracing::instrument(name = "Profile page", skip_all)]
pub async fn profile<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_profile_page(
        &request,
        &state.user_store,
        &state.session_store,
        &state.cookie_name,
        response_builder(),
    )
    .await?)
}

#[tracing::instrument(name = "Admin page", skip_all)]
pub async fn admin<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_admin_page(
        &request,
        &state.user_store,
        &state.session_store,
        &state.cookie_name,
        response_builder(),
    )
    .await?)
}
