//! Request/response doubles and a wired-up JWT scheme for adapter tests.

use std::collections::HashMap;

use secrecy::Secret;
use vestibule_application::SignupUseCase;
use vestibule_core::{AuthRequest, AuthResponseBuilder, SignupCredentials};

use crate::{
    auth_validation::JwtAuthConfig,
    authentication::JwtScheme,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, HashSetBannedTokenStore},
    serialization::JsonUserSerializer,
};

pub type TestScheme =
    JwtScheme<HashMapUserStore, Argon2PasswordHasher, HashSetBannedTokenStore, JsonUserSerializer>;

#[derive(Default)]
pub struct MockRequest {
    pub headers: HashMap<String, String>,
    pub cookies: HashMap<String, String>,
}

impl MockRequest {
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_lowercase(), value.to_string());
        self
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }
}

impl AuthRequest for MockRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    fn method(&self) -> &str {
        "DELETE"
    }

    fn path(&self) -> &str {
        "/api/v1/logout"
    }
}

/// Builder whose response is itself, so tests can inspect what was set.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RecordingBuilder {
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl AuthResponseBuilder for RecordingBuilder {
    type Response = Self;

    fn status(mut self, code: u16) -> Self {
        self.status = code;
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    fn build(self) -> Self::Response {
        self
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_owned())
}

pub fn jwt_config() -> JwtAuthConfig {
    JwtAuthConfig {
        jwt_cookie_name: "auth_token".to_string(),
        jwt_secret: secret("test-secret"),
        token_ttl_in_seconds: 600,
    }
}

// Small argon2 parameters keep the tests fast.
pub fn fast_hasher() -> Argon2PasswordHasher {
    Argon2PasswordHasher::new(64, 1, 1)
}

/// A scheme backed by fresh in-memory stores holding one registered user.
pub async fn scheme_with_user(email: &str, password: &str) -> TestScheme {
    let user_store = HashMapUserStore::new();
    let signup = SignupUseCase::new(user_store.clone(), fast_hasher());
    let outcome = signup
        .execute(SignupCredentials {
            email: secret(email),
            password: secret(password),
            password_confirmation: None,
        })
        .await
        .unwrap();
    assert!(outcome.persisted(), "fixture user was rejected: {:?}", outcome.errors());

    JwtScheme::new(
        user_store,
        fast_hasher(),
        HashSetBannedTokenStore::new(),
        JsonUserSerializer,
        jwt_config(),
    )
}
