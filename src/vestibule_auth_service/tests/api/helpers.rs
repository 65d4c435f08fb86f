use std::sync::Arc;

use fake::{Fake, faker::internet::en::SafeEmail};
use secrecy::Secret;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use vestibule_adapters::{
    auth_validation::JwtAuthConfig,
    authentication::JwtScheme,
    config::{AllowedOrigins, test},
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, HashSetBannedTokenStore},
    serialization::JsonUserSerializer,
};
use vestibule_application::SignupUseCase;
use vestibule_auth_service::{AuthService, SERVICE_NAME};
use vestibule_axum::HealthState;

pub const COOKIE_NAME: &str = "auth_token";
pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub api_prefix: String,
    pub http_client: reqwest::Client,
    pub health: Arc<HealthState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_prefix("/api/v1").await
    }

    pub async fn with_prefix(api_prefix: &str) -> Self {
        Self::spawn(api_prefix, AllowedOrigins::default()).await
    }

    pub async fn with_allowed_origins(allowed_origins: AllowedOrigins) -> Self {
        Self::spawn("/api/v1", allowed_origins).await
    }

    async fn spawn(api_prefix: &str, allowed_origins: AllowedOrigins) -> Self {
        let user_store = HashMapUserStore::new();
        // Cheap parameters keep the suite fast
        let password_hasher = Argon2PasswordHasher::new(64, 1, 1);

        let jwt_config = JwtAuthConfig {
            jwt_cookie_name: COOKIE_NAME.to_string(),
            jwt_secret: Secret::new("integration-test-secret".to_string()),
            token_ttl_in_seconds: 600,
        };

        let scheme = JwtScheme::new(
            user_store.clone(),
            password_hasher,
            HashSetBannedTokenStore::new(),
            JsonUserSerializer,
            jwt_config,
        );
        let health = Arc::new(HealthState::new(SERVICE_NAME, "test"));

        let router = AuthService::new(
            SignupUseCase::new(user_store, password_hasher),
            JsonUserSerializer,
            scheme,
            health.clone(),
            api_prefix,
        )
        .into_router(allowed_origins);

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            api_prefix: api_prefix.trim_end_matches('/').to_string(),
            http_client,
            health,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.address, self.api_prefix, path)
    }

    pub async fn get_up(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/up", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_signup(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(self.api_url("/signup"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_signup_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(self.api_url("/signup"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(self.api_url("/login"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_logout_with_bearer(&self, token: &str) -> reqwest::Response {
        self.http_client
            .delete(self.api_url("/logout"))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    // Set by hand: the auth cookie is Secure and would not be replayed over http
    pub async fn delete_logout_with_cookie(&self, token: &str) -> reqwest::Response {
        self.http_client
            .delete(self.api_url("/logout"))
            .header("cookie", format!("{COOKIE_NAME}={token}"))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_logout(&self) -> reqwest::Response {
        self.http_client
            .delete(self.api_url("/logout"))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sign up a fresh user and return its email.
    pub async fn signup_user(&self) -> String {
        let email = get_random_email();
        let response = self.post_signup(&signup_body(&email, PASSWORD)).await;
        assert_eq!(response.status().as_u16(), 201);
        email
    }

    /// Sign up and log in a fresh user, returning the issued token.
    pub async fn logged_in_token(&self) -> String {
        let email = self.signup_user().await;
        let response = self.post_login(&login_body(&email, PASSWORD)).await;
        assert_eq!(response.status().as_u16(), 200);
        bearer_token(&response).expect("login sets a bearer token")
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

pub fn signup_body(email: &str, password: &str) -> Value {
    json!({ "user": { "email": email, "password": password } })
}

pub fn login_body(email: &str, password: &str) -> Value {
    json!({ "user": { "email": email, "password": password } })
}

pub fn bearer_token(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}

pub fn set_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|cookie| cookie.starts_with(&format!("{COOKIE_NAME}=")))
        .map(str::to_owned)
}
