pub mod env {
    pub const ENVIRONMENT_ENV_VAR: &str = "VESTIBULE_ENV";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    /// Prefix of structured overrides, e.g. `VESTIBULE__APPLICATION__PORT`.
    pub const ENV_PREFIX: &str = "VESTIBULE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod defaults {
    pub const ENVIRONMENT: &str = "local";
    pub const CONFIG_DIR: &str = "config";

    pub const HOST: &str = "0.0.0.0";
    pub const PORT: i64 = 3000;
    pub const API_PREFIX: &str = "/api/v1";

    pub const JWT_COOKIE_NAME: &str = "auth_token";
    pub const JWT_TIME_TO_LIVE: i64 = 86_400;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
