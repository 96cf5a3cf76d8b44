use portcullis_application::{AuthorizationGate, LoginUseCase, SessionManager};
use portcullis_core::{
    AuthRequest, AuthResponseBuilder, AuthResponseHelpers, LoginForm, PasswordHasher,
    SessionStore, UserStore,
};

use super::{HandlerError, form_data, page_data, redirect, resolve_session, with_session_cookie};

const LOGIN_FIELDS: [&str; 2] = ["email", "password"];

pub async fn handle_login_page<R, U, S, B>(
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
    let mut session = resolve_session(request, session_store, cookie_name).await?;
    // Resolve the viewer first so a failed lookup leaves the flash stored.
    let viewer = AuthorizationGate::new(user_store).viewer(&session).await?;
    let flash = session.read_and_clear_flash();
    SessionManager::new(session_store)
        .commit_if_modified(&mut session)
        .await?;

    Ok(
        with_session_cookie(builder, cookie_name, &session).render_page(
            "login",
            page_data(viewer, form_data(&flash, &LOGIN_FIELDS)),
        ),
    )
}

/// Runs the login flow. The session is already committed when the
/// redirect is built, so the follow-up request sees it.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn handle_login<R, U, H, S, B>(
    request: &R,
    user_store: &U,
    hasher: &H,
    session_store: &S,
    cookie_name: &str,
    form: LoginForm,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    R: AuthRequest,
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
    B: AuthResponseBuilder,
{
    let mut session = resolve_session(request, session_store, cookie_name).await?;
    let outcome = LoginUseCase::new(user_store, hasher, session_store)
        .execute(&mut session, form)
        .await?;

    Ok(redirect(builder, cookie_name, &session, &outcome))
}
