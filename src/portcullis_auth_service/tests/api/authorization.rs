use reqwest::StatusCode;

use crate::helpers::{TestApp, page};

#[tokio::test]
async fn protected_pages_reject_anonymous_visitors() {
    let app = TestApp::new().await;

    let profile = app.get("/profile").await;
    assert_eq!(profile.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(page(profile).await.0, "401");

    let admin = app.get("/admin").await;
    assert_eq!(admin.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn regular_user_is_forbidden_from_admin() {
    let app = TestApp::new().await;
    app.signup("a@b.com", "a@b.com", "secret1").await;
    app.login("a@b.com", "secret1").await;

    let response = app.get("/admin").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let (name, data) = page(response).await;
    assert_eq!(name, "403");
    assert_eq!(data["isAuth"], true);
    assert_eq!(data["isAdmin"], false);
}

#[tokio::test]
async fn admin_reaches_admin_page_and_sees_the_flag() {
    let app = TestApp::with_admin("root@b.com", "secret1").await;
    app.login("root@b.com", "secret1").await;

    let response = app.get("/admin").await;
    assert_eq!(response.status(), StatusCode::OK);
    let (name, data) = page(response).await;
    assert_eq!(name, "admin");
    assert_eq!(data["isAdmin"], true);

    let (_, welcome) = page(app.get("/").await).await;
    assert_eq!(welcome["isAuth"], true);
    assert_eq!(welcome["isAdmin"], true);
}
