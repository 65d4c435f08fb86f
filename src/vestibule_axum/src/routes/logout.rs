//! Axum-specific logout route.

use axum::{
    extract::State,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use vestibule_adapters::handlers::{self, LogoutHandlerError};
use vestibule_core::HttpAuthenticationScheme;

use super::{error_response, scheme_failure};
use crate::adapters::{AxumRequest, response_builder};

/// Axum logout route.
///
/// The request head is handed to the scheme, which decides where its token
/// lives (bearer header, cookie).
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S>(State(scheme): State<S>, parts: Parts) -> Response
where
    S: HttpAuthenticationScheme,
{
    let request = AxumRequest::from(parts);

    match handlers::handle_logout(&scheme, &request, response_builder()).await {
        Ok(resp) => resp,
        Err(LogoutHandlerError::MissingToken) => LogoutRouteError::MissingToken.into_response(),
        Err(LogoutHandlerError::Scheme(e)) => {
            let (status, message) = scheme_failure(scheme.status_for_error(&e), &e);
            LogoutRouteError::Failed { status, message }.into_response()
        }
    }
}

const MISSING_TOKEN_MESSAGE: &str = "Missing authentication token";

/// Errors that can occur during logout
#[derive(Debug, Error)]
pub enum LogoutRouteError {
    #[error("Missing authentication token")]
    MissingToken,

    #[error("{message}")]
    Failed { status: StatusCode, message: String },
}

impl IntoResponse for LogoutRouteError {
    fn into_response(self) -> Response {
        match self {
            LogoutRouteError::MissingToken => {
                error_response(StatusCode::UNAUTHORIZED, MISSING_TOKEN_MESSAGE)
            }
            LogoutRouteError::Failed { status, message } => error_response(status, &message),
        }
    }
}
