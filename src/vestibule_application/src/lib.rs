pub mod use_cases;

pub use use_cases::{LoginError, LoginUseCase, LogoutError, LogoutUseCase, SignupUseCase};
