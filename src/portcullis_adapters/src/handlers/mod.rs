//! Framework-agnostic page handlers.
//!
//! Each handler resolves the session from the request cookie, runs one
//! application flow and turns its outcome into a response through
//! [`AuthResponseBuilder`]. Framework routes only extract the form and pick a
//! builder. A `HandlerError` means a store failed; routes log it and render
//! the generic failure page.

pub mod admin;
pub mod login;
pub mod logout;
pub mod profile;
pub mod signup;
pub mod welcome;

pub use admin::handle_admin_page;
pub use login::{handle_login, handle_login_page};
pub use logout::handle_logout;
pub use profile::handle_profile_page;
pub use signup::{handle_signup, handle_signup_page};
pub use welcome::handle_welcome_page;

use axum_extra::extract::cookie::{Cookie, SameSite};
use portcullis_application::{
    AuthorizationError, LoginError, LogoutError, SessionError, SessionManager, SignupError,
};
use portcullis_core::{
    AuthRequest, AuthResponseBuilder, AuthResponseHelpers, Denial, FlashPayload, FlowOutcome,
    Session, SessionStore, ViewerContext,
};
use serde_json::{Map, Value, json};

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("Signup failed: {0}")]
    Signup(#[from] SignupError),
    #[error("Login failed: {0}")]
    Login(#[from] LoginError),
    #[error("Logout failed: {0}")]
    Logout(#[from] LogoutError),
    #[error("Authorization failed: {0}")]
    Authorization(#[from] AuthorizationError),
}

/// `Set-Cookie` value for the session, present only when the session was
/// created during this request and has been committed.
pub fn session_cookie(cookie_name: &str, session: &Session) -> Option<String> {
    session.needs_cookie().then(|| {
        Cookie::build((cookie_name.to_owned(), session.id().as_str().to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
            .to_string()
    })
}

pub fn with_session_cookie<B>(builder: B, cookie_name: &str, session: &Session) -> B
where
    B: AuthResponseBuilder,
{
    match session_cookie(cookie_name, session) {
        Some(cookie) => builder.cookie(&cookie),
        None => builder,
    }
}

pub(crate) async fn resolve_session<R, S>(
    request: &R,
    session_store: &S,
    cookie_name: &str,
) -> Result<Session, HandlerError>
where
    R: AuthRequest,
    S: SessionStore,
{
    let session = SessionManager::new(session_store)
        .resolve_or_create(request.cookie(cookie_name))
        .await?;
    Ok(session)
}

/// Page data with the navigation flags every page carries.
pub fn page_data(viewer: ViewerContext, data: Value) -> Value {
    let mut object = match data {
        Value::Object(object) => object,
        Value::Null => Map::new(),
        other => {
            let mut object = Map::new();
            object.insert("content".to_owned(), other);
            object
        }
    };
    object.insert("isAuth".to_owned(), Value::Bool(viewer.is_authenticated));
    object.insert("isAdmin".to_owned(), Value::Bool(viewer.is_admin));
    Value::Object(object)
}

/// Form page data: the flash fields, with every expected field present.
pub(crate) fn form_data(flash: &FlashPayload, fields: &[&str]) -> Value {
    let mut object = Map::new();
    object.insert("hasError".to_owned(), Value::Bool(flash.has_error()));
    if let Some(message) = flash.message() {
        object.insert("message".to_owned(), Value::String(message.to_owned()));
    }
    for field in fields {
        object.insert(
            (*field).to_owned(),
            Value::String(flash.field(field).to_owned()),
        );
    }
    Value::Object(object)
}

pub(crate) fn redirect<B>(
    builder: B,
    cookie_name: &str,
    session: &Session,
    outcome: &FlowOutcome,
) -> B::Response
where
    B: AuthResponseBuilder,
{
    with_session_cookie(builder, cookie_name, session).redirect(outcome.redirect().path())
}

pub(crate) fn denied<B>(
    builder: B,
    cookie_name: &str,
    session: &Session,
    denial: Denial,
    viewer: ViewerContext,
) -> B::Response
where
    B: AuthResponseBuilder,
{
    let status = denial.status_code();
    with_session_cookie(builder, cookie_name, session).render_page_with_status(
        status,
        &status.to_string(),
        page_data(viewer, json!({})),
    )
}
