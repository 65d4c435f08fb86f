pub mod local_jwt_validator;

pub use local_jwt_validator::{
    Claims, JwtAuthConfig, TokenAuthError, create_auth_cookie, create_removal_cookie,
    generate_auth_token, validate_auth_token,
};
