use portcullis_core::{
    Email, INVALID_INPUT_MESSAGE, USER_EXISTS_MESSAGE, UserStore,
};
use reqwest::StatusCode;

use crate::helpers::{TestApp, location, page, sets_session_cookie};

#[tokio::test]
async fn signup_redirects_to_login_and_stores_the_user() {
    let app = TestApp::new().await;

    let response = app.signup("a@b.com", "a@b.com", "secret1").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
    assert!(!sets_session_cookie(&response));
    let user = app
        .user_store
        .find_by_email(&Email::try_from("a@b.com").unwrap())
        .await
        .unwrap()
        .expect("user stored");
    assert!(!user.is_admin());
}

#[tokio::test]
async fn invalid_signup_flashes_input_error_once() {
    let app = TestApp::new().await;

    let response = app.signup("a@b.com", "x@b.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/signup"));
    assert!(sets_session_cookie(&response));

    let (name, data) = page(app.get("/signup").await).await;
    assert_eq!(name, "signup");
    assert_eq!(data["hasError"], true);
    assert_eq!(data["message"], INVALID_INPUT_MESSAGE);
    assert_eq!(data["email"], "a@b.com");
    assert_eq!(data["confirmEmail"], "x@b.com");

    let (_, data) = page(app.get("/signup").await).await;
    assert_eq!(data["hasError"], false);
    assert_eq!(data["email"], "");
}

#[tokio::test]
async fn short_password_and_missing_separator_are_rejected() {
    let app = TestApp::new().await;

    let short = app.signup("a@b.com", "a@b.com", "12345").await;
    assert_eq!(location(&short), Some("/signup"));

    let no_at = app.signup("ab.com", "ab.com", "secret1").await;
    assert_eq!(location(&no_at), Some("/signup"));

    assert!(
        app.user_store
            .find_by_email(&Email::try_from("a@b.com").unwrap())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn duplicate_signup_reports_existing_user() {
    let app = TestApp::new().await;
    app.signup("a@b.com", "a@b.com", "secret1").await;

    let response = app.signup("a@b.com", "a@b.com", "other-secret").await;
    assert_eq!(location(&response), Some("/signup"));

    let (_, data) = page(app.get("/signup").await).await;
    assert_eq!(data["message"], USER_EXISTS_MESSAGE);
}
