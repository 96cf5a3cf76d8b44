use portcullis_application::AuthorizationGate;
use portcullis_core::{
    Access, AuthRequest, AuthResponseBuilder, AuthResponseHelpers, SessionStore, UserStore,
};
use serde_json::json;

use super::{HandlerError, denied, page_data, resolve_session, with_session_cookie};

/// Profile page, for any authenticated session.
pub async fn handle_profile_page<R, U, S, B>(
    request: &R,
    user_store: &U,
    session_store: &S,
    cookie_name: &str,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    R: AuthRequest,
    U: UserStore,
    S: SessionStore,
    B: AuthResponseBuilder,
{
    let session = resolve_session(request, session_store, cookie_name).await?;
    let gate = AuthorizationGate::new(user_store);
    let viewer = gate.viewer(&session).await?;

    if let Access::Deny(denial) = gate.require_authenticated(&session) {
        return Ok(denied(builder, cookie_name, &session, denial, viewer));
    }

    let email = session
        .authenticated_user()
        .map(|user| user.email.as_str().to_owned())
        .unwrap_or_default();

    Ok(with_session_cookie(builder, cookie_name, &session)
        .render_page("profile", page_data(viewer, json!({ "email": email }))))
}
