use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{defaults, env};
use crate::auth_validation::JwtAuthConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Mount point of the signup, login and logout routes. Empty mounts them at the root.
    pub api_prefix: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub cookie_name: String,
    /// Token lifetime in seconds
    pub time_to_live: i64,
}

impl From<&JwtSettings> for JwtAuthConfig {
    fn from(settings: &JwtSettings) -> Self {
        JwtAuthConfig {
            jwt_cookie_name: settings.cookie_name.clone(),
            jwt_secret: settings.secret.clone(),
            token_ttl_in_seconds: settings.time_to_live,
        }
    }
}

/// Origins allowed to make credentialed cross-origin requests.
///
/// Accepts either a list or a single comma separated string. Empty disables CORS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OriginsInput")]
pub struct AllowedOrigins(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OriginsInput {
    List(Vec<String>),
    Csv(String),
}

impl From<OriginsInput> for AllowedOrigins {
    fn from(input: OriginsInput) -> Self {
        let raw = match input {
            OriginsInput::List(list) => list,
            OriginsInput::Csv(csv) => csv.split(',').map(str::to_owned).collect(),
        };

        AllowedOrigins(
            raw.into_iter()
                .map(|origin| origin.trim().trim_end_matches('/').to_owned())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }
}

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OriginsInput::List(origins.into_iter().map(Into::into).collect()).into()
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    /// Built-in defaults, with `JWT_SECRET` as the fallback signing secret.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = Config::builder()
            .set_default("application.host", defaults::HOST)?
            .set_default("application.port", defaults::PORT)?
            .set_default("application.api_prefix", defaults::API_PREFIX)?
            .set_default("auth.jwt.cookie_name", defaults::JWT_COOKIE_NAME)?
            .set_default("auth.jwt.time_to_live", defaults::JWT_TIME_TO_LIVE)?
            .set_default("auth.allowed_origins", Vec::<String>::new())?;

        if let Ok(secret) = std::env::var(env::JWT_SECRET_ENV_VAR) {
            builder = builder.set_default("auth.jwt.secret", secret)?;
        }

        Ok(builder)
    }

    /// Layered load: defaults, then `config/base.*` and `config/{VESTIBULE_ENV}.*`
    /// when present, then `VESTIBULE__*` environment variables.
    #[tracing::instrument(name = "Settings::load")]
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside development
        let _ = dotenvy::dotenv();

        let environment = std::env::var(env::ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| defaults::ENVIRONMENT.to_owned());
        tracing::debug!(%environment, "loading settings");

        let builder = Self::builder()?
            .add_source(File::with_name(&format!("{}/base", defaults::CONFIG_DIR)).required(false))
            .add_source(
                File::with_name(&format!("{}/{environment}", defaults::CONFIG_DIR))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins"),
            );

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn jwt_auth_config(&self) -> JwtAuthConfig {
        JwtAuthConfig::from(&self.auth.jwt)
    }
}
