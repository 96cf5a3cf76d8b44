use portcullis_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, config::test::APP_ADDRESS,
};
use portcullis_auth_service::AuthService;
use portcullis_core::{Email, Password, PasswordHasher, User, UserId};
use reqwest::{Response, redirect::Policy};
use secrecy::Secret;
use serde_json::Value;

pub const COOKIE_NAME: &str = "portcullis.sid";

/// A running service on an ephemeral port with in-memory stores.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_users(HashMapUserStore::new()).await
    }

    /// Start with an administrator account already registered.
    pub async fn with_admin(email: &str, password: &str) -> Self {
        let digest = Argon2PasswordHasher::new()
            .hash(&Password::try_from(Secret::new(password.to_string())).unwrap())
            .await
            .unwrap();
        let admin = User::new(UserId::new(), Email::try_from(email).unwrap(), digest, true);
        Self::with_users(HashMapUserStore::with_users([admin])).await
    }

    async fn with_users(user_store: HashMapUserStore) -> Self {
        let auth_service = AuthService::new(
            user_store.clone(),
            Argon2PasswordHasher::new(),
            HashMapSessionStore::new(),
            COOKIE_NAME,
        );

        let listener = tokio::net::TcpListener::bind(APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            auth_service
                .run_standalone(listener, None)
                .await
                .expect("Failed to run auth service");
        });

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            user_store,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn signup(&self, email: &str, confirm_email: &str, password: &str) -> Response {
        self.post_form(
            "/signup",
            &[
                ("email", email),
                ("confirm-email", confirm_email),
                ("password", password),
            ],
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post_form("/login", &[("email", email), ("password", password)])
            .await
    }

    pub async fn logout(&self) -> Response {
        self.post_form("/logout", &[]).await
    }
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn sets_session_cookie(response: &Response) -> bool {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|cookie| cookie.starts_with(&format!("{COOKIE_NAME}=")))
}

/// Parsed `{ "page": ..., "data": ... }` document.
pub async fn page(response: Response) -> (String, Value) {
    let body: Value = response.json().await.expect("page body is JSON");
    let name = body["page"].as_str().unwrap_or_default().to_string();
    (name, body["data"].clone())
}
