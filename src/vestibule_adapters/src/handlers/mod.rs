//! Framework-agnostic authentication handlers.
//!
//! These handlers contain the request logic without any framework dependencies.
//! Framework-specific routes extract data from requests, call these handlers,
//! and convert the results back to framework responses.

pub mod login;
pub mod logout;
pub mod signup;

pub use login::handle_login;
pub use logout::{LogoutHandlerError, handle_logout};
pub use signup::{SIGNUP_SUCCESS_MESSAGE, SignupFields, SignupParams, handle_signup, respond_with};
