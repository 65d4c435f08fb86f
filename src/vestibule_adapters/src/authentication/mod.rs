pub mod jwt_scheme;

pub use jwt_scheme::{
    JwtAuthError, JwtScheme, JwtToken, LOGIN_SUCCESS_MESSAGE, LOGOUT_SUCCESS_MESSAGE, LoginParams,
    PasswordCredentials,
};
