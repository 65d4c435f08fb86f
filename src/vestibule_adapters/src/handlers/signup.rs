//! Framework-agnostic signup handler.
//!
//! Turns the outcome of a signup attempt into the JSON envelope clients see:
//! 201 `{ "user", "message" }` when the account was stored, 422 `{ "errors" }`
//! otherwise.

use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;
use vestibule_core::{
    AuthResponseBuilder, AuthResponseHelpers, IdentityProvider, IdentityProviderError,
    SignupCredentials, SignupOutcome, UserSerializer,
};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signed up successfully.";

/// Signup request body: `{ "user": { "email", "password", "password_confirmation" } }`.
///
/// Every field may be absent; absent email and password reach the provider as
/// empty strings so they fail validation like blank input does.
#[derive(Debug, Default, Deserialize)]
pub struct SignupParams {
    #[serde(default)]
    pub user: SignupFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignupFields {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub password_confirmation: Option<Secret<String>>,
}

impl From<SignupParams> for SignupCredentials {
    fn from(params: SignupParams) -> Self {
        let SignupFields {
            email,
            password,
            password_confirmation,
        } = params.user;

        SignupCredentials {
            email: email.unwrap_or_else(|| Secret::new(String::new())),
            password: password.unwrap_or_else(|| Secret::new(String::new())),
            password_confirmation,
        }
    }
}

/// Shape the response for a finished signup attempt.
///
/// Pure: the same outcome always yields the same status and body.
pub fn respond_with<Z, B>(outcome: &SignupOutcome, serializer: &Z, builder: B) -> B::Response
where
    Z: UserSerializer + ?Sized,
    B: AuthResponseBuilder,
{
    match outcome.user() {
        Some(user) => builder.created(json!({
            "user": serializer.serialize(user),
            "message": SIGNUP_SUCCESS_MESSAGE,
        })),
        None => builder.unprocessable_entity(json!({ "errors": outcome.errors() })),
    }
}

/// Handle signup request - framework agnostic.
///
/// # Arguments
/// * `provider` - Validates the credentials and stores the user
/// * `serializer` - Renders the stored user for the response
/// * `credentials` - Raw signup input
/// * `builder` - HTTP response builder
///
/// # Returns
/// The 201 or 422 response. Infrastructure failures inside the provider are
/// returned as errors for the framework layer to render.
pub async fn handle_signup<P, Z, B>(
    provider: &P,
    serializer: &Z,
    credentials: SignupCredentials,
    builder: B,
) -> Result<B::Response, IdentityProviderError>
where
    P: IdentityProvider + ?Sized,
    Z: UserSerializer + ?Sized,
    B: AuthResponseBuilder,
{
    let outcome = provider.attempt_signup(credentials).await?;

    Ok(respond_with(&outcome, serializer, builder))
}
