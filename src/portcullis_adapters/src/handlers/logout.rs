use portcullis_application::LogoutUseCase;
use portcullis_core::{AuthRequest, AuthResponseBuilder, SessionStore};

use super::{HandlerError, redirect, resolve_session};

pub async fn handle_logout<R, S, B>(
    request: &R,
    session_store: &S,
    cookie_name: &str,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    R: AuthRequest,
    S: SessionStore,
    B: AuthResponseBuilder,
{
    let mut session = resolve_session(request, session_store, cookie_name).await?;
    let outcome = LogoutUseCase::new(session_store)
        .execute(&mut session)
        .await?;

    Ok(redirect(builder, cookie_name, &session, &outcome))
}
