//! Framework-agnostic login handler.

use vestibule_core::{AuthResponseBuilder, HttpAuthenticationScheme};

/// Handle login request - framework agnostic.
///
/// # Arguments
///
/// * `scheme` - The session collaborator to log in with
/// * `credentials` - User credentials (already deserialized from request)
/// * `builder` - Response builder (framework-specific but implements our trait)
///
/// # Returns
///
/// The scheme's login response, or the scheme's error. Use
/// `HttpAuthenticationScheme::status_for_error` to pick the status for it.
///
/// # Example
///
/// ```ignore
/// // In an Axum route:
/// pub async fn login<S: HttpAuthenticationScheme>(
///     State(scheme): State<S>,
///     Json(credentials): Json<S::Credentials>,
/// ) -> Response {
///     match handle_login(&scheme, credentials, response_builder()).await {
///         Ok(response) => response,
///         Err(e) => LoginRouteError::new(scheme.status_for_error(&e), &e).into_response(),
///     }
/// }
/// ```
pub async fn handle_login<S, B>(
    scheme: &S,
    credentials: S::Credentials,
    builder: B,
) -> Result<B::Response, S::AuthError>
where
    S: HttpAuthenticationScheme,
    B: AuthResponseBuilder,
{
    let session = scheme.login(credentials).await?;

    // Let the scheme decide how to deliver the token via HTTP
    Ok(scheme.create_login_response(builder, session))
}
