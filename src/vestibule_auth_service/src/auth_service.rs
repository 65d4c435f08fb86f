use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use vestibule_adapters::config::AllowedOrigins;
use vestibule_axum::{
    HealthState, SignupState,
    routes::{login, logout, signup, up},
};
use vestibule_core::{HttpAuthenticationScheme, IdentityProvider, UserSerializer};

use crate::route_table::{Operation, ROUTES, Scope, normalize_prefix};
use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Registration and session API, assembled from the route table.
pub struct AuthService {
    router: Router,
    health: Arc<HealthState>,
}

impl AuthService {
    /// Build the router once from `ROUTES`.
    ///
    /// # Arguments
    /// * `provider` - Identity provider behind signup
    /// * `serializer` - Renders users in signup and login responses
    /// * `scheme` - Session collaborator behind login and logout
    /// * `health` - Liveness flag shared with the shutdown path
    /// * `api_prefix` - Mount point of the api-scoped routes; empty mounts them at the root
    ///
    /// # Note on Architecture
    /// Each route is given only the state it needs and turned into a
    /// `Router<()>` before merging.
    pub fn new<P, Z, S>(
        provider: P,
        serializer: Z,
        scheme: S,
        health: Arc<HealthState>,
        api_prefix: &str,
    ) -> Self
    where
        P: IdentityProvider + Clone + 'static,
        Z: UserSerializer + Clone + 'static,
        S: HttpAuthenticationScheme,
    {
        let signup_state = SignupState::new(provider, serializer);

        let mut api: Router = Router::new();
        let mut root: Router = Router::new();

        for route in ROUTES {
            let router: Router = match route.operation {
                Operation::SignUp => Router::new()
                    .route(route.path, route.method.on(signup::<P, Z>))
                    .with_state(signup_state.clone()),
                Operation::LogIn => Router::new()
                    .route(route.path, route.method.on(login::<S>))
                    .with_state(scheme.clone()),
                Operation::LogOut => Router::new()
                    .route(route.path, route.method.on(logout::<S>))
                    .with_state(scheme.clone()),
                Operation::Liveness => Router::new()
                    .route(route.path, route.method.on(up))
                    .with_state(health.clone()),
            };

            match route.scope {
                Scope::Api => api = api.merge(router),
                Scope::Root => root = root.merge(router),
            }
        }

        let prefix = normalize_prefix(api_prefix);
        let router = if prefix.is_empty() {
            root.merge(api)
        } else {
            root.nest(&prefix, api)
        };

        Self { router, health }
    }

    pub fn health(&self) -> Arc<HealthState> {
        self.health.clone()
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be served or mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Origins allowed to make credentialed requests; empty disables CORS
    pub fn into_router(mut self, allowed_origins: AllowedOrigins) -> Router {
        if !allowed_origins.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .expose_headers([header::AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// Stops on Ctrl-C or SIGTERM. The liveness probe starts answering 503 as
    /// soon as the signal arrives, while in-flight requests drain.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: AllowedOrigins,
    ) -> Result<(), std::io::Error> {
        let health = self.health();
        let router = self.into_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal(health))
            .await
    }
}

async fn shutdown_signal(health: Arc<HealthState>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
    health.mark_unhealthy();
}
