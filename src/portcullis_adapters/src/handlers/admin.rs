use portcullis_application::AuthorizationGate;
use portcullis_core::{
    Access, AuthRequest, AuthResponseBuilder, AuthResponseHelpers, SessionStore, UserStore,
};
use serde_json::json;

use super::{HandlerError, denied, page_data, resolve_session, with_session_cookie};

/// Admin page. The admin flag is read from the user store on every request.
pub async fn handle_admin_page<R, U, S, B>(
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
    let (access, viewer) = AuthorizationGate::new(user_store)
        .admin_access(&session)
        .await?;

    if let Access::Deny(denial) = access {
        return Ok(denied(builder, cookie_name, &session, denial, viewer));
    }

    Ok(with_session_cookie(builder, cookie_name, &session)
        .render_page("admin", page_data(viewer, json!({}))))
}
