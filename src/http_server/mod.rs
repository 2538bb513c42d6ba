//! # HTTP Server Module
//!
//! Serves the GraphQL API over axum.
//!
//! # Endpoints
//!
//! - `POST /graphql` - GraphQL queries and mutations
//! - `GET /graphql` - GraphiQL IDE (when enabled)
//! - `/health` - Health check
//! - `/metrics` - Request counters

pub mod config;
pub mod graphql_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
