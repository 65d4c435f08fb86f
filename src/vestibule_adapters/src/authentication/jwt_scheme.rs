use async_trait::async_trait;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use vestibule_application::{LoginError, LoginUseCase, LogoutError, LogoutUseCase};
use vestibule_core::{
    AuthRequest, AuthResponseBuilder, AuthenticationScheme, BannedTokenStore,
    HttpAuthenticationScheme, PasswordHasher, Session, UserSerializer, UserStore,
};

use crate::auth_validation::local_jwt_validator::{
    JwtAuthConfig, TokenAuthError, create_auth_cookie, create_removal_cookie, generate_auth_token,
    validate_auth_token,
};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully.";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully.";

// ============================================================================
// JWT Authentication Scheme
// ============================================================================

/// JWT-based session collaborator using password credentials.
///
/// This scheme:
/// - Checks email/password through `LoginUseCase`
/// - Issues HS256 tokens carrying a unique `jti`
/// - Delivers tokens as a bearer header and an HTTP-only cookie
/// - Logs out by banning the token's `jti`
#[derive(Clone)]
pub struct JwtScheme<U, H, B, Z>
where
    U: UserStore,
    H: PasswordHasher,
    B: BannedTokenStore,
{
    login_use_case: LoginUseCase<U, H>,
    logout_use_case: LogoutUseCase<B>,
    banned_token_store: B,
    serializer: Z,
    jwt_config: JwtAuthConfig,
}

impl<U, H, B, Z> JwtScheme<U, H, B, Z>
where
    U: UserStore,
    H: PasswordHasher,
    B: BannedTokenStore + Clone,
{
    pub fn new(
        user_store: U,
        password_hasher: H,
        banned_token_store: B,
        serializer: Z,
        config: JwtAuthConfig,
    ) -> Self {
        Self {
            login_use_case: LoginUseCase::new(user_store, password_hasher),
            logout_use_case: LogoutUseCase::new(banned_token_store.clone()),
            banned_token_store,
            serializer,
            jwt_config: config,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.jwt_config.jwt_cookie_name
    }

    pub fn config(&self) -> &JwtAuthConfig {
        &self.jwt_config
    }
}

// ============================================================================
// HTTP Authentication Scheme - Framework-agnostic HTTP-level token delivery
// ============================================================================

impl<U, H, B, Z> HttpAuthenticationScheme for JwtScheme<U, H, B, Z>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    B: BannedTokenStore + Clone + 'static,
    Z: UserSerializer + Clone + 'static,
{
    fn create_login_response<RB: AuthResponseBuilder>(
        &self,
        builder: RB,
        session: Session<Self::Token>,
    ) -> RB::Response {
        let bearer = format!("Bearer {}", session.token.as_str());
        let cookie = create_auth_cookie(
            session.token.into_string(),
            &self.jwt_config.jwt_cookie_name,
        );

        builder
            .status(200)
            .header("authorization", &bearer)
            .cookie(&cookie.to_string())
            .json_body(json!({
                "user": self.serializer.serialize(&session.user),
                "message": LOGIN_SUCCESS_MESSAGE,
            }))
            .build()
    }

    fn create_logout_response<RB: AuthResponseBuilder>(&self, builder: RB) -> RB::Response {
        let removal = create_removal_cookie(&self.jwt_config.jwt_cookie_name);

        builder
            .status(200)
            .cookie(&removal.to_string())
            .json_body(json!({ "message": LOGOUT_SUCCESS_MESSAGE }))
            .build()
    }

    fn extract_token_from_request<R: AuthRequest>(&self, req: &R) -> Option<Self::Token> {
        // Header first, cookie second
        req.bearer_token()
            .or_else(|| req.cookie(&self.jwt_config.jwt_cookie_name))
            .filter(|token| !token.is_empty())
            .map(|token| JwtToken(token.to_string()))
    }

    fn status_for_error(&self, error: &Self::AuthError) -> u16 {
        match error {
            JwtAuthError::Login(LoginError::InvalidCredentials)
            | JwtAuthError::Logout(LogoutError::AlreadyRevoked)
            | JwtAuthError::Token(
                TokenAuthError::MissingToken
                | TokenAuthError::TokenError(_)
                | TokenAuthError::TokenIsBanned,
            ) => 401,
            JwtAuthError::Login(_)
            | JwtAuthError::Logout(_)
            | JwtAuthError::Token(TokenAuthError::UnexpectedError(_)) => 500,
        }
    }
}

// ============================================================================
// Core Trait: AuthenticationScheme
// ============================================================================

#[async_trait]
impl<U, H, B, Z> AuthenticationScheme for JwtScheme<U, H, B, Z>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    B: BannedTokenStore + Clone + 'static,
    Z: UserSerializer + Clone + 'static,
{
    type Token = JwtToken;
    type Credentials = LoginParams;
    type AuthError = JwtAuthError;

    #[tracing::instrument(name = "JwtScheme::login", skip_all)]
    async fn login(
        &self,
        credentials: Self::Credentials,
    ) -> Result<Session<Self::Token>, Self::AuthError> {
        let PasswordCredentials { email, password } = credentials.user;
        let user = self
            .login_use_case
            .execute(
                email.unwrap_or_else(empty_secret),
                password.unwrap_or_else(empty_secret),
            )
            .await?;

        let token = generate_auth_token(
            user.email(),
            self.jwt_config.token_ttl_in_seconds,
            self.jwt_config.as_bytes(),
        )?;

        tracing::info!(user_id = %user.id(), "session opened");
        Ok(Session {
            user,
            token: JwtToken(token),
        })
    }

    #[tracing::instrument(name = "JwtScheme::logout", skip_all)]
    async fn logout(&self, token: Self::Token) -> Result<(), Self::AuthError> {
        let claims =
            validate_auth_token(token.as_str(), &self.banned_token_store, &self.jwt_config)
                .await?;

        self.logout_use_case.execute(claims.jti).await?;

        Ok(())
    }
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

// ============================================================================
// Domain Types
// ============================================================================

/// JWT token wrapper type
#[derive(Debug, Clone)]
pub struct JwtToken(pub String);

impl JwtToken {
    /// Get the raw token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for JwtToken {
    fn from(s: String) -> Self {
        JwtToken(s)
    }
}

/// Login request body: `{ "user": { "email", "password" } }`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    #[serde(default)]
    pub user: PasswordCredentials,
}

/// Credentials for password-based login. Missing fields are treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct PasswordCredentials {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum JwtAuthError {
    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Logout(#[from] LogoutError),

    #[error(transparent)]
    Token(#[from] TokenAuthError),
}
