pub mod auth_service;
pub mod route_table;
pub mod tracing;

pub use auth_service::AuthService;
pub use route_table::{HttpMethod, Operation, ROUTES, RouteDefinition, Scope};

/// Name reported by the liveness probe.
pub const SERVICE_NAME: &str = "vestibule";
