pub mod email;
pub mod password;
pub mod signup;
pub mod user;
pub mod validation;
