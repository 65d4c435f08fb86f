use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use vestibule_adapters::{
    authentication::JwtScheme,
    config::Settings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, HashSetBannedTokenStore},
    serialization::JsonUserSerializer,
};
use vestibule_application::SignupUseCase;
use vestibule_auth_service::{AuthService, SERVICE_NAME, tracing::init_tracing};
use vestibule_axum::HealthState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    // In-memory stores; ids and sessions do not survive a restart
    let user_store = HashMapUserStore::new();
    let banned_token_store = HashSetBannedTokenStore::new();
    let password_hasher = Argon2PasswordHasher::default();

    let identity_provider = SignupUseCase::new(user_store.clone(), password_hasher);
    let scheme = JwtScheme::new(
        user_store,
        password_hasher,
        banned_token_store,
        JsonUserSerializer,
        settings.jwt_auth_config(),
    );
    let health = Arc::new(HealthState::new(SERVICE_NAME, env!("CARGO_PKG_VERSION")));

    let auth_service = AuthService::new(
        identity_provider,
        JsonUserSerializer,
        scheme,
        health,
        &settings.application.api_prefix,
    );

    let listener = TcpListener::bind(settings.application.address()).await?;
    tracing::info!(api_prefix = %settings.application.api_prefix, "starting auth service");

    auth_service
        .run_standalone(listener, settings.auth.allowed_origins)
        .await?;

    Ok(())
}
