pub mod domain;
pub mod http_abstraction;
pub mod http_authentication_scheme;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    password::{Password, PasswordError, PasswordHash},
    signup::{SignupCredentials, SignupOutcome},
    user::{User, UserId},
    validation::{Attribute, FieldError, ValidationErrors},
};

pub use ports::{
    repositories::{
        BannedTokenStore, BannedTokenStoreError, NewUser, StoredCredentials, UserStore,
        UserStoreError,
    },
    services::{
        IdentityProvider, IdentityProviderError, PasswordHasher, PasswordHasherError,
        UserSerializer,
    },
};

pub use strategies::authenticator::{AuthenticationScheme, Session};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};
pub use http_authentication_scheme::HttpAuthenticationScheme;
