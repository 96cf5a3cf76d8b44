//! Zero-cost HTTP abstraction traits for the authentication pages.
//!
//! Frameworks implement these on newtype wrappers of their own request and
//! response types, so the page handlers stay framework agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  portcullis_core: Defines HTTP traits    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  portcullis_axum: Newtype wrappers       │
//! │  struct AxumRequest(request::Parts)      │
//! │  impl AuthRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  portcullis_adapters::handlers use the   │
//! │  traits (generic over framework)         │
//! └──────────────────────────────────────────┘
//! ```

/// Trait for HTTP requests that carry a session cookie.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Header lookup is case-insensitive.
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;
}

/// Trait for building HTTP responses.
///
/// ```ignore
/// builder
///     .status(303)
///     .header("location", "/profile")
///     .cookie("portcullis.sid=...; HttpOnly; Path=/")
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Add a Set-Cookie header
    ///
    /// The cookie_value should be a complete cookie string like:
    /// `"portcullis.sid=abc; HttpOnly; SameSite=Lax; Path=/"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Convenience methods for the responses the page handlers produce.
///
/// Pages are delivered as `{ "page": <name>, "data": <data> }`; turning that
/// into markup is left to whoever consumes it.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// 303 See Other to `path`
    fn redirect(self, path: &str) -> Self::Response {
        self.status(303).header("location", path).build()
    }

    /// 200 OK page
    fn render_page(self, page: &str, data: serde_json::Value) -> Self::Response {
        self.render_page_with_status(200, page, data)
    }

    fn render_page_with_status(
        self,
        status: u16,
        page: &str,
        data: serde_json::Value,
    ) -> Self::Response {
        self.status(status)
            .json_body(serde_json::json!({ "page": page, "data": data }))
            .build()
    }

    /// Generic failure page
    fn internal_error(self) -> Self::Response {
        self.render_page_with_status(500, "500", serde_json::Value::Null)
    }
}

// Blanket implementation for all AuthResponseBuilder types
impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
