//! # Vestibule - Registration and Session Service Library
//!
//! This is a facade crate that re-exports all public APIs from the vestibule components.
//! Use this crate to get access to signup, login, logout and the liveness probe in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! vestibule = { path = "../vestibule" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `ValidationErrors`, etc.
//! - **Ports**: `UserStore`, `BannedTokenStore`, `IdentityProvider`, `UserSerializer`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, `LogoutUseCase`
//! - **Adapters**: `HashMapUserStore`, `Argon2PasswordHasher`, `JwtScheme`, etc.
//! - **Service**: `AuthService` - mounts the route table on an axum router

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use vestibule_core::*;
}

// Re-export most commonly used core types at the root level
pub use vestibule_core::{
    Attribute, Email, FieldError, Password, SignupCredentials, SignupOutcome, User, UserId,
    ValidationErrors,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service trait definitions
pub mod repositories {
    pub use vestibule_core::{
        BannedTokenStore, BannedTokenStoreError, NewUser, StoredCredentials, UserStore,
        UserStoreError,
    };
}

// Re-export ports at root level
pub use vestibule_core::{
    AuthenticationScheme, BannedTokenStore, BannedTokenStoreError, HttpAuthenticationScheme,
    IdentityProvider, IdentityProviderError, PasswordHasher, UserSerializer, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use vestibule_application::*;
}

// Re-export use cases at root level
pub use vestibule_application::{LoginUseCase, LogoutUseCase, SignupUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic request handlers
    pub mod handlers {
        pub use vestibule_adapters::handlers::*;
    }

    /// Axum routes and request/response wrappers
    pub mod http {
        pub use vestibule_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use vestibule_adapters::persistence::*;
    }

    /// JWT authentication utilities
    pub mod auth {
        pub use vestibule_adapters::auth_validation::*;
        pub use vestibule_adapters::authentication::*;
    }

    /// Configuration
    pub mod config {
        pub use vestibule_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use vestibule_adapters::{
    authentication::JwtScheme,
    config::Settings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, HashSetBannedTokenStore},
    serialization::JsonUserSerializer,
};
pub use vestibule_axum::HealthState;

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use vestibule_auth_service::{AuthService, ROUTES, RouteDefinition, SERVICE_NAME};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
