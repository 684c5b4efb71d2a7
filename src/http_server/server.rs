//! # HTTP Server
//!
//! Binds the employee routes to a listener.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::observability::{log_event, log_serving, Event};
use crate::store::RecordStore;

use super::config::HttpServerConfig;
use super::employee_routes::{employee_routes, EmployeeState};

/// Build the application router over `store`
pub fn app<S: RecordStore + 'static>(store: Arc<S>, collection: &str) -> Router {
    let state = Arc::new(EmployeeState::new(store, collection));

    Router::new()
        .merge(employee_routes(state))
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the employee API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with the given configuration
    pub fn new<S: RecordStore + 'static>(
        config: HttpServerConfig,
        store: Arc<S>,
        collection: &str,
    ) -> Self {
        Self {
            router: app(store, collection),
            config,
        }
    }

    /// Serve until Ctrl-C, then drain in-flight requests
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.listen_addr()).await?;
        log_serving(listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
