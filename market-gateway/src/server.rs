//! Gateway router and startup.

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use market_client::{ProductApi, UserApi};

use crate::auth::{TokenVerifier, auth_middleware};
use crate::handlers::{self, GatewayState};

/// HTTP server fronting the two backend services.
pub struct GatewayServer<U: UserApi, P: ProductApi> {
    state: Arc<GatewayState<U, P>>,
    verifier: Arc<dyn TokenVerifier>,
}

impl<U: UserApi, P: ProductApi> GatewayServer<U, P> {
    pub fn new(users: U, products: P, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            state: Arc::new(GatewayState { users, products }),
            verifier,
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/users", post(handlers::create_user::<U, P>))
            .route("/api/users", get(handlers::list_users::<U, P>))
            .route("/api/users/{id}", get(handlers::get_user::<U, P>))
            .route("/api/users/{id}", put(handlers::update_user::<U, P>))
            .route("/api/users/{id}", delete(handlers::delete_user::<U, P>))
            .route("/api/products", post(handlers::create_product::<U, P>))
            .route("/api/products", get(handlers::list_products::<U, P>))
            .route("/api/products/{id}", get(handlers::get_product::<U, P>))
            .route("/api/products/{id}", put(handlers::update_product::<U, P>))
            .route(
                "/api/products/{id}",
                delete(handlers::delete_product::<U, P>),
            )
            .layer(middleware::from_fn_with_state(
                self.verifier.clone(),
                auth_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("gateway listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
