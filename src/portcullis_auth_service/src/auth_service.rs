use axum::{
    Router,
    http::{HeaderValue, Method, request},
};
use portcullis_adapters::config::AllowedOrigins;
use portcullis_axum::{AuthState, routes};
use portcullis_core::{PasswordHasher, SessionStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The authentication pages as one router
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService with the provided stores and hasher
    ///
    /// # Arguments
    /// * `user_store` - Store for user accounts (must be Clone)
    /// * `hasher` - Password hasher (must be Clone)
    /// * `session_store` - Store for session records (must be Clone)
    /// * `cookie_name` - Name of the session cookie
    ///
    /// Stores implement Clone by sharing their backing storage, so every
    /// request handler sees the same users and sessions.
    pub fn new<U, H, S>(user_store: U, hasher: H, session_store: S, cookie_name: &str) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        S: SessionStore + Clone + 'static,
    {
        let state = AuthState::new(user_store, hasher, session_store, cookie_name);

        Self {
            router: routes::router(state),
        }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
