//! Liveness probe.
//!
//! `GET /up` answers 200 while the process is live and 503 once it has been
//! flagged unhealthy, which happens when graceful shutdown begins.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Shared liveness flag plus the identity reported by the probe.
#[derive(Debug)]
pub struct HealthState {
    live: AtomicBool,
    name: String,
    version: String,
}

impl HealthState {
    /// Create a health state that starts live.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            live: AtomicBool::new(true),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

#[derive(Debug, Serialize)]
struct Liveness<'a> {
    status: &'a str,
    name: &'a str,
    version: &'a str,
}

/// Liveness probe.
pub async fn up(State(health): State<Arc<HealthState>>) -> Response {
    let (status, label) = if health.is_alive() {
        (StatusCode::OK, "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "shutting_down")
    };

    let body = Liveness {
        status: label,
        name: &health.name,
        version: &health.version,
    };

    (status, [(header::CACHE_CONTROL, "no-store")], Json(body)).into_response()
}
