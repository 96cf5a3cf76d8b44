//! Axum logout route.

use axum::{extract::State, http::request::Parts, response::Response};
use portcullis_adapters::handlers;
use portcullis_core::{PasswordHasher, SessionStore, UserStore};

use crate::adapters::{AxumRequest, response_builder};
use crate::routes::RouteError;
use crate::state::AuthState;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, H, S>(
    State(state): State<AuthState<U, H, S>>,
    parts: Parts,
) -> Result<Response, RouteError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let request = AxumRequest(parts);
    Ok(handlers::handle_logout(
        &request,
        &state.session_store,
        &state.cookie_name,
        response_builder(),
    )
    .await?)
}
