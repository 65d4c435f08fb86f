//! Framework-agnostic logout handler.

use thiserror::Error;
use vestibule_core::{AuthRequest, AuthResponseBuilder, HttpAuthenticationScheme};

#[derive(Debug, Error)]
pub enum LogoutHandlerError<E> {
    #[error("Missing authentication token")]
    MissingToken,
    #[error(transparent)]
    Scheme(E),
}

/// Handle logout request - framework agnostic.
///
/// # Arguments
///
/// * `scheme` - The session collaborator to log out from
/// * `request` - The HTTP request (implements AuthRequest trait)
/// * `builder` - Response builder (framework-specific but implements our trait)
///
/// # Returns
///
/// The scheme's logout response; `MissingToken` when the request carries no
/// token at all, otherwise whatever the scheme reported.
pub async fn handle_logout<S, R, B>(
    scheme: &S,
    request: &R,
    builder: B,
) -> Result<B::Response, LogoutHandlerError<S::AuthError>>
where
    S: HttpAuthenticationScheme,
    R: AuthRequest,
    B: AuthResponseBuilder,
{
    // Extract token from request (scheme decides where to look: cookie, header, etc.)
    let token = scheme
        .extract_token_from_request(request)
        .ok_or(LogoutHandlerError::MissingToken)?;

    scheme
        .logout(token)
        .await
        .map_err(LogoutHandlerError::Scheme)?;

    Ok(scheme.create_logout_response(builder))
}
