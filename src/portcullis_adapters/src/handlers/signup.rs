use portcullis_application::{AuthorizationGate, SessionManager, SignupUseCase};
use portcullis_core::{
    AuthRequest, AuthResponseBuilder, AuthResponseHelpers, PasswordHasher, SessionStore,
    SignupForm, UserStore,
};

use super::{HandlerError, form_data, page_data, redirect, resolve_session, with_session_cookie};

const SIGNUP_FIELDS: [&str; 3] = ["email", "confirmEmail", "password"];

/// Signup form. A pending flash is shown once and then dropped from the
/// stored session.
pub async fn handle_signup_page<R, U, S, B>(
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
            "signup",
            page_data(viewer, form_data(&flash, &SIGNUP_FIELDS)),
        ),
    )
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn handle_signup<R, U, H, S, B>(
    request: &R,
    user_store: &U,
    hasher: &H,
    session_store: &S,
    cookie_name: &str,
    form: SignupForm,
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
    let outcome = SignupUseCase::new(user_store, hasher, session_store)
        .execute(&mut session, form)
        .await?;

    Ok(redirect(builder, cookie_name, &session, &outcome))
}
