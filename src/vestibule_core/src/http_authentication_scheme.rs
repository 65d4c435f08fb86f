//! HTTP-level authentication scheme traits.
//!
//! These traits bridge domain-level authentication (`AuthenticationScheme`)
//! with HTTP-specific concerns like how tokens are delivered to clients.

use super::http_abstraction::{AuthRequest, AuthResponseBuilder};
use crate::{AuthenticationScheme, Session};

/// How a scheme's sessions travel over HTTP.
///
/// Different schemes deliver tokens differently (cookies, `Authorization`
/// headers, JSON bodies). Keeping that here leaves `AuthenticationScheme`
/// free of transport details.
///
/// # Example
///
/// ```ignore
/// impl HttpAuthenticationScheme for JwtScheme<...> {
///     fn create_login_response<B: AuthResponseBuilder>(
///         &self,
///         builder: B,
///         session: Session<Self::Token>,
///     ) -> B::Response {
///         builder
///             .status(200)
///             .header("authorization", &format!("Bearer {}", session.token.as_str()))
///             .build()
///     }
///     // ...
/// }
/// ```
pub trait HttpAuthenticationScheme: AuthenticationScheme {
    /// Create the response for a successful login.
    fn create_login_response<B: AuthResponseBuilder>(
        &self,
        builder: B,
        session: Session<Self::Token>,
    ) -> B::Response;

    /// Create the response for a successful logout.
    ///
    /// Cookie-based schemes clear their cookie here.
    fn create_logout_response<B: AuthResponseBuilder>(&self, builder: B) -> B::Response;

    /// Find this scheme's token in a request, wherever the scheme keeps it.
    fn extract_token_from_request<R: AuthRequest>(&self, req: &R) -> Option<Self::Token>;

    /// HTTP status a failed login or logout maps to.
    ///
    /// Credential and token problems are the client's (4xx); store or
    /// hashing failures are the server's (5xx).
    fn status_for_error(&self, error: &Self::AuthError) -> u16;
}
