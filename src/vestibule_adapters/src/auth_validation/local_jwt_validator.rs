use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use vestibule_core::{BannedTokenStore, Email};

#[derive(Debug, Clone)]
pub struct JwtAuthConfig {
    pub jwt_cookie_name: String,
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing authentication token")]
    MissingToken,
    #[error("Invalid token: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Token has been revoked")]
    TokenIsBanned,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user
    pub sub: String,
    /// Unique token id, the key used for revocation
    pub jti: String,
    pub iat: usize,
    pub exp: usize,
}

// Create cookie and set the value to the passed-in token string
pub fn create_auth_cookie(token: String, cookie_name: &str) -> Cookie<'static> {
    Cookie::build((cookie_name.to_owned(), token))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn create_removal_cookie(cookie_name: &str) -> Cookie<'static> {
    let mut cookie = create_auth_cookie(String::new(), cookie_name);
    cookie.make_removal();
    cookie
}

// Create JWT auth token
pub fn generate_auth_token(
    email: &Email,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let now = Utc::now();
    let exp = now
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let to_usize = |ts: i64| {
        usize::try_from(ts)
            .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))
    };

    let claims = Claims {
        sub: email.as_str().to_owned(),
        jti: Uuid::new_v4().to_string(),
        iat: to_usize(now.timestamp())?,
        exp: to_usize(exp)?,
    };

    create_token(&claims, secret)
}

// Check signature and expiry, then make sure the token id has not been revoked
pub async fn validate_auth_token(
    token: &str,
    banned_token_store: &dyn BannedTokenStore,
    config: &JwtAuthConfig,
) -> Result<Claims, TokenAuthError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)?;

    let is_banned = banned_token_store
        .contains_token(&claims.jti)
        .await
        .map_err(|e| TokenAuthError::UnexpectedError(e.to_string()))?;

    if is_banned {
        return Err(TokenAuthError::TokenIsBanned);
    }

    Ok(claims)
}

// Create JWT auth token by encoding claims using the JWT secret
fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenAuthError> {
    encode(
        &jsonwebtoken::Header::default(),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenAuthError::UnexpectedError(e.to_string()))
}
