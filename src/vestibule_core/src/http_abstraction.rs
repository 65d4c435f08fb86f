//! Framework-independent HTTP traits.
//!
//! Web frameworks implement these on newtype wrappers of their own request and
//! response types. Handlers and authentication schemes are written against the
//! traits, so the same response-shaping code runs under any framework.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  vestibule_core: Defines HTTP traits     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  vestibule_axum: Newtype wrappers        │
//! │  struct AxumRequest(http::request::Parts)│
//! │  impl AuthRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  vestibule_adapters::handlers use the    │
//! │  traits, generic over the framework      │
//! └──────────────────────────────────────────┘
//! ```

/// Read access to an incoming HTTP request.
///
/// Implementations return `&str` references straight from the framework's
/// data structures.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Header names are case-insensitive.
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;

    /// The token of an `Authorization: Bearer <token>` header, if present.
    fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        let token = token.trim();

        (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
    }
}

/// Builder for an outgoing HTTP response.
///
/// ```ignore
/// builder
///     .status(201)
///     .json_body(json!({"message": "Signed up successfully."}))
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
    /// `"auth=token; HttpOnly; Secure; SameSite=Lax; Max-Age=3600"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Shorthands for the responses this service produces.
///
/// Implemented for every `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// 200 OK with a JSON body
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    /// 201 Created with a JSON body
    fn created(self, body: serde_json::Value) -> Self::Response {
        self.status(201).json_body(body).build()
    }

    /// 422 Unprocessable Entity with a JSON body
    fn unprocessable_entity(self, body: serde_json::Value) -> Self::Response {
        self.status(422).json_body(body).build()
    }

    /// 400 Bad Request with `{ "error": message }`
    fn bad_request(self, message: &str) -> Self::Response {
        self.status(400)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }

    /// 401 Unauthorized with `{ "error": message }`
    fn unauthorized(self, message: &str) -> Self::Response {
        self.status(401)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }

    /// 500 Internal Server Error with `{ "error": message }`
    fn internal_error(self, message: &str) -> Self::Response {
        self.status(500)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }
}

// Blanket implementation for all AuthResponseBuilder types
impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
