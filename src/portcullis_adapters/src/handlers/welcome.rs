use portcullis_application::AuthorizationGate;
use portcullis_core::{
    AuthRequest, AuthResponseBuilder, AuthResponseHelpers, SessionStore, UserStore,
};
use serde_json::json;

use super::{HandlerError, page_data, resolve_session, with_session_cookie};

/// Landing page. Never writes the session.
pub async fn handle_welcome_page<R, U, S, B>(
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
    let viewer = AuthorizationGate::new(user_store).viewer(&session).await?;

    Ok(with_session_cookie(builder, cookie_name, &session)
        .render_page("welcome", page_data(viewer, json!({}))))
}
