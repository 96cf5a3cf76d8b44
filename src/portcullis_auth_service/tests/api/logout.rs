use reqwest::StatusCode;

use crate::helpers::{TestApp, location};

#[tokio::test]
async fn logout_redirects_home_and_ends_access() {
    let app = TestApp::new().await;
    app.signup("a@b.com", "a@b.com", "secret1").await;
    app.login("a@b.com", "secret1").await;
    assert_eq!(app.get("/profile").await.status(), StatusCode::OK);

    let response = app.logout().await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
    assert_eq!(app.get("/profile").await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_session_is_harmless() {
    let app = TestApp::new().await;

    let response = app.logout().await;

    assert_eq!(location(&response), Some("/"));
    assert_eq!(app.get("/").await.status(), StatusCode::OK);
}
