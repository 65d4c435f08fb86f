use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::user::User;

// ============================================================================
// Core Authentication Scheme Trait
// ============================================================================

/// Session collaborator behind the login and logout routes.
///
/// A scheme decides how credentials are checked and what a session token is
/// (a signed JWT, an opaque session id, ...). Registration is not part of it:
/// accounts are created through an `IdentityProvider`.
#[async_trait]
pub trait AuthenticationScheme: Send + Sync + Clone + 'static {
    /// The type of token/session identifier this scheme produces
    type Token: Clone + Send + Sync;

    /// The credentials this scheme expects for login
    type Credentials: for<'de> Deserialize<'de> + Send;

    /// Errors that can occur during login or logout
    type AuthError: std::error::Error + Send + Sync + 'static;

    /// Verify credentials and open a session.
    async fn login(
        &self,
        credentials: Self::Credentials,
    ) -> Result<Session<Self::Token>, Self::AuthError>;

    /// Close the session identified by `token`, so it can no longer be used.
    async fn logout(&self, token: Self::Token) -> Result<(), Self::AuthError>;
}

// ============================================================================
// Session - Domain Type
// ============================================================================

/// An authenticated user together with the token that proves it.
#[derive(Debug, Clone)]
pub struct Session<T> {
    pub user: User,
    pub token: T,
}
