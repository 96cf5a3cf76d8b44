use portcullis_core::INVALID_CREDENTIALS_MESSAGE;
use reqwest::StatusCode;

use crate::helpers::{TestApp, location, page, sets_session_cookie};

#[tokio::test]
async fn login_lands_on_profile_with_a_session() {
    let app = TestApp::new().await;
    app.signup("a@b.com", "a@b.com", "secret1").await;

    let response = app.login("a@b.com", "secret1").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/profile"));
    assert!(sets_session_cookie(&response));

    // The session was committed before the redirect went out.
    let profile = app.get("/profile").await;
    assert_eq!(profile.status(), StatusCode::OK);
    let (name, data) = page(profile).await;
    assert_eq!(name, "profile");
    assert_eq!(data["email"], "a@b.com");
    assert_eq!(data["isAuth"], true);
    assert_eq!(data["isAdmin"], false);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_identical() {
    let app = TestApp::new().await;
    app.signup("a@b.com", "a@b.com", "secret1").await;

    let wrong = app.login("a@b.com", "not-it").await;
    assert_eq!(location(&wrong), Some("/login"));
    let (_, wrong_data) = page(app.get("/login").await).await;

    let unknown = app.login("nobody@b.com", "secret1").await;
    assert_eq!(location(&unknown), Some("/login"));
    let (_, unknown_data) = page(app.get("/login").await).await;

    assert_eq!(wrong_data["message"], INVALID_CREDENTIALS_MESSAGE);
    assert_eq!(unknown_data["message"], INVALID_CREDENTIALS_MESSAGE);
    assert_eq!(wrong_data["hasError"], unknown_data["hasError"]);
    assert_eq!(wrong_data["isAuth"], false);
}

#[tokio::test]
async fn empty_login_is_a_credential_mismatch() {
    let app = TestApp::new().await;

    let response = app.login("", "").await;
    assert_eq!(location(&response), Some("/login"));

    let (_, data) = page(app.get("/login").await).await;
    assert_eq!(data["message"], INVALID_CREDENTIALS_MESSAGE);
}
