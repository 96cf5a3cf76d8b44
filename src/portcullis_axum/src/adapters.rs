//! Axum framework adapters for the HTTP abstraction.
//!
//! `AuthRequest` and `AuthResponseBuilder` live in `portcullis_core`; they are
//! implemented here on newtype wrappers to get around the orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  portcullis_core::AuthRequest (trait)      │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(request::Parts)               │
//! │  impl AuthRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The request wrapper holds only the head of the request, so routes can
//! still consume the body with extractors such as `Form`.

use axum::body::Body;
use axum::http::{Response, StatusCode, request::Parts};
use portcullis_core::{AuthRequest, AuthResponseBuilder};

/// Newtype wrapper around the head of an Axum request.
#[repr(transparent)]
pub struct AxumRequest(pub Parts);

impl From<Parts> for AxumRequest {
    fn from(parts: Parts) -> Self {
        AxumRequest(parts)
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers.get(name)?.to_str().ok()
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        // Browsers may send several Cookie headers; search them all.
        self.0
            .headers
            .get_all("cookie")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    fn method(&self) -> &str {
        self.0.method.as_str()
    }

    fn path(&self) -> &str {
        self.0.uri.path()
    }
}

/// Newtype wrapper around Axum's response builder.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid response parts");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, Request};
    use portcullis_core::AuthResponseHelpers;

    fn parts(request: Request<Body>) -> AxumRequest {
        AxumRequest(request.into_parts().0)
    }

    #[test]
    fn test_auth_request_implementation() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/login?next=1")
            .header("content-type", "application/x-www-form-urlencoded")
            .header("cookie", "portcullis.sid=abc123; theme=dark")
            .body(Body::empty())
            .unwrap();

        let axum_req = parts(req);

        assert_eq!(axum_req.method(), "POST");
        assert_eq!(axum_req.path(), "/login");
        assert_eq!(
            axum_req.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(axum_req.cookie("portcullis.sid"), Some("abc123"));
        assert_eq!(axum_req.cookie("theme"), Some("dark"));
        assert_eq!(axum_req.cookie("nonexistent"), None);
    }

    #[test]
    fn test_cookie_found_in_second_header() {
        let req = Request::builder()
            .header("cookie", "theme=dark")
            .header("cookie", "portcullis.sid=abc123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(parts(req).cookie("portcullis.sid"), Some("abc123"));
    }

    #[test]
    fn test_redirect_is_see_other() {
        let resp = response_builder()
            .cookie("portcullis.sid=abc; Path=/")
            .redirect("/profile");

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("location").and_then(|v| v.to_str().ok()),
            Some("/profile")
        );
        assert_eq!(
            resp.headers()
                .get("set-cookie")
                .and_then(|v| v.to_str().ok()),
            Some("portcullis.sid=abc; Path=/")
        );
    }

    #[test]
    fn test_invalid_header_degrades_to_500() {
        let resp = response_builder()
            .status(200)
            .header("x-bad", "line\nbreak")
            .build();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
