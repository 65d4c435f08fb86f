//! Axum implementations of the framework-agnostic HTTP traits.
//!
//! `AuthRequest` and `AuthResponseBuilder` live in `vestibule_core`; they are
//! implemented here on newtype wrappers to satisfy the orphan rule:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  vestibule_core::AuthRequest (trait)       │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(http::request::Parts)         │
//! │  impl AuthRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```

use axum::body::Body;
use axum::extract::Request as AxumExtractRequest;
use axum::http::{Response, StatusCode, request::Parts};
use vestibule_core::{AuthRequest, AuthResponseBuilder};

/// Newtype wrapper around the head of an Axum request.
///
/// Only the parts are kept: authentication never reads the body, and `Parts`
/// is `Sync` so it can be held across awaits in a handler future.
#[repr(transparent)]
pub struct AxumRequest(pub Parts);

impl From<Parts> for AxumRequest {
    fn from(parts: Parts) -> Self {
        AxumRequest(parts)
    }
}

impl From<AxumExtractRequest> for AxumRequest {
    fn from(req: AxumExtractRequest) -> Self {
        let (parts, _body) = req.into_parts();
        AxumRequest(parts)
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers.get(name)?.to_str().ok()
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        // A request may carry several Cookie headers
        self.0
            .headers
            .get_all("cookie")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    fn method(&self) -> &str {
        self.0.method.as_str()
    }

    fn path(&self) -> &str {
        self.0.uri.path()
    }
}

/// Axum's response builder plus a pending JSON body.
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
        match self.builder.body(Body::from(body)) {
            Ok(response) => response,
            // Invalid status or header value somewhere in the chain
            Err(e) => {
                tracing::error!(error = %e, "failed to build response");
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
