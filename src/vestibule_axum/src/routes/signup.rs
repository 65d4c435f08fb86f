//! Axum-specific signup route.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use vestibule_adapters::handlers::{self, SignupParams};
use vestibule_core::{IdentityProvider, IdentityProviderError, UserSerializer};

use super::{INTERNAL_ERROR_MESSAGE, error_response};
use crate::adapters::response_builder;

/// Collaborators of the signup route.
#[derive(Clone)]
pub struct SignupState<P, Z> {
    pub provider: P,
    pub serializer: Z,
}

impl<P, Z> SignupState<P, Z> {
    pub fn new(provider: P, serializer: Z) -> Self {
        Self {
            provider,
            serializer,
        }
    }
}

/// Axum signup route.
///
/// Validation failures are part of the normal 201/422 contract and come back
/// from the handler as a response; only an unreadable body or a failing
/// provider become a `SignupError`.
#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<P, Z>(
    State(state): State<SignupState<P, Z>>,
    payload: Result<Json<SignupParams>, JsonRejection>,
) -> Result<Response, SignupError>
where
    P: IdentityProvider + Clone + 'static,
    Z: UserSerializer + Clone + 'static,
{
    let Json(params) = payload.map_err(|e| SignupError::MalformedRequest(e.body_text()))?;

    handlers::handle_signup(
        &state.provider,
        &state.serializer,
        params.into(),
        response_builder(),
    )
    .await
    .map_err(SignupError::Provider)
}

/// Errors that can occur during signup
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("{0}")]
    MalformedRequest(String),

    #[error("Identity provider failed: {0}")]
    Provider(#[source] IdentityProviderError),
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        match self {
            SignupError::MalformedRequest(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
            SignupError::Provider(e) => {
                tracing::error!(error = %e, "signup failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
