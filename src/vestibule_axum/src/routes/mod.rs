//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and convert results to Axum responses.

pub mod health;
pub mod login;
pub mod logout;
pub mod signup;

pub use health::{HealthState, up};
pub use login::{LoginRouteError, login};
pub use logout::{LogoutRouteError, logout};
pub use signup::{SignupError, SignupState, signup};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// `{ "error": message }` with the given status.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Status and client-facing message for a failed scheme call. Server-side
/// failures are logged and reported with a generic message.
pub(crate) fn scheme_failure(status: u16, error: &dyn std::error::Error) -> (StatusCode, String) {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!(error = %error, "request failed");
        (status, INTERNAL_ERROR_MESSAGE.to_string())
    } else {
        tracing::debug!(error = %error, "request rejected");
        (status, error.to_string())
    }
}
