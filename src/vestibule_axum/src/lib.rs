//! Axum integration for the Vestibule registration and session API.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  vestibule_core: HTTP trait definitions  │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  vestibule_axum: Axum implementations    │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use vestibule_axum::routes;
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login::<Scheme>))
//!     .route("/logout", delete(routes::logout::<Scheme>))
//!     .with_state(jwt_scheme);
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use routes::{HealthState, SignupState};
