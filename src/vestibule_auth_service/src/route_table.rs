//! The service's routes, declared once.
//!
//! `AuthService` walks this table at startup to build its router; nothing is
//! registered anywhere else and the router is never modified afterwards.

use axum::{
    handler::Handler,
    routing::{MethodRouter, delete, get, post},
};

/// Logical operation a route delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignUp,
    LogIn,
    LogOut,
    Liveness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn on<H, T, S>(self, handler: H) -> MethodRouter<S>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        match self {
            HttpMethod::Get => get(handler),
            HttpMethod::Post => post(handler),
            HttpMethod::Delete => delete(handler),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Where a route is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Under the configured api prefix, `/api/v1` by default.
    Api,
    /// At the server root, regardless of prefix.
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDefinition {
    pub operation: Operation,
    pub method: HttpMethod,
    pub path: &'static str,
    pub scope: Scope,
}

pub static ROUTES: &[RouteDefinition] = &[
    RouteDefinition {
        operation: Operation::SignUp,
        method: HttpMethod::Post,
        path: "/signup",
        scope: Scope::Api,
    },
    RouteDefinition {
        operation: Operation::LogIn,
        method: HttpMethod::Post,
        path: "/login",
        scope: Scope::Api,
    },
    RouteDefinition {
        operation: Operation::LogOut,
        method: HttpMethod::Delete,
        path: "/logout",
        scope: Scope::Api,
    },
    RouteDefinition {
        operation: Operation::Liveness,
        method: HttpMethod::Get,
        path: "/up",
        scope: Scope::Root,
    },
];

/// `/api/v1/` and `api/v1` both become `/api/v1`; `""` and `/` become `""`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Full path of a route once mounted under `api_prefix`.
pub fn mounted_path(route: &RouteDefinition, api_prefix: &str) -> String {
    match route.scope {
        Scope::Api => format!("{}{}", normalize_prefix(api_prefix), route.path),
        Scope::Root => route.path.to_string(),
    }
}
