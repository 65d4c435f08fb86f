//! Axum-specific login route.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use vestibule_adapters::handlers;
use vestibule_core::HttpAuthenticationScheme;

use super::{error_response, scheme_failure};
use crate::adapters::response_builder;

/// Axum login route.
///
/// Uses Axum's extractors and error handling; the session logic is in the
/// framework-agnostic handler.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S>(
    State(scheme): State<S>,
    payload: Result<Json<S::Credentials>, JsonRejection>,
) -> Result<Response, LoginRouteError>
where
    S: HttpAuthenticationScheme,
{
    let Json(credentials) =
        payload.map_err(|e| LoginRouteError::MalformedRequest(e.body_text()))?;

    handlers::handle_login(&scheme, credentials, response_builder())
        .await
        .map_err(|e| {
            let (status, message) = scheme_failure(scheme.status_for_error(&e), &e);
            LoginRouteError::AuthenticationFailed { status, message }
        })
}

/// Errors that can occur during login
#[derive(Debug, Error)]
pub enum LoginRouteError {
    #[error("{0}")]
    MalformedRequest(String),

    #[error("{message}")]
    AuthenticationFailed { status: StatusCode, message: String },
}

impl IntoResponse for LoginRouteError {
    fn into_response(self) -> Response {
        match self {
            LoginRouteError::MalformedRequest(msg) => {
                error_response(StatusCode::BAD_REQUEST, &msg)
            }
            LoginRouteError::AuthenticationFailed { status, message } => {
                error_response(status, &message)
            }
        }
    }
}
