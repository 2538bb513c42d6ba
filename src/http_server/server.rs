//! # HTTP Server
//!
//! Combines the GraphQL and observability routers into one axum server.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::dataset::DatasetStore;
use crate::graphql::{build_schema, GradebookSchema, GraphQLContext};
use crate::observability::{
    log_event, log_event_with_fields, Event, Logger, MetricsRegistry, Severity,
};

use super::config::{parse_origin, HttpServerConfig};
use super::graphql_routes::graphql_routes;
use super::observability_routes::observability_routes;

/// HTTP server serving the GraphQL API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server owning the given store
    pub fn new(config: HttpServerConfig, store: DatasetStore) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let schema = build_schema(GraphQLContext::new(store, metrics.clone()));
        let router = Self::build_router(&config, schema, metrics);
        Self { config, router }
    }

    fn build_router(
        config: &HttpServerConfig,
        schema: GradebookSchema,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let mut origins = Vec::with_capacity(config.cors_origins.len());
            for origin in &config.cors_origins {
                match parse_origin(origin) {
                    Some(value) => origins.push(value),
                    None => Logger::log(
                        Severity::Warn,
                        "CORS_ORIGIN_IGNORED",
                        &[("origin", origin.as_str())],
                    ),
                }
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(observability_routes(metrics))
            .merge(graphql_routes(schema, config.graphiql))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(
            Event::Serving,
            &[
                ("addr", addr.to_string().as_str()),
                ("graphiql", if self.config.graphiql { "true" } else { "false" }),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        Logger::error("SHUTDOWN_SIGNAL_FAILED", &[("error", e.to_string().as_str())]);
        std::future::pending::<()>().await;
    }
}
