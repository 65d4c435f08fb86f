pub mod login;
pub mod logout;
pub mod signup;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenience
pub use login::{LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use signup::SignupUseCase;
