//! HTTP Server Configuration
//!
//! Host, port, CORS and GraphiQL settings.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve the GraphiQL IDE on `GET /graphql` (default: true)
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphiql() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            graphiql: default_graphiql(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// First configured CORS origin that cannot be used, if any
    pub fn invalid_cors_origin(&self) -> Option<&str> {
        self.cors_origins
            .iter()
            .map(String::as_str)
            .find(|origin| parse_origin(origin).is_none())
    }
}

/// Parse an `http://` or `https://` origin into a header value
pub fn parse_origin(origin: &str) -> Option<HeaderValue> {
    let has_scheme = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .is_some_and(|host| !host.is_empty());
    if !has_scheme {
        return None;
    }
    HeaderValue::from_str(origin).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
        assert!(config.graphiql);
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 4000}"#).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.graphiql);
    }

    #[test]
    fn test_parse_origin() {
        assert!(parse_origin("https://app.example.com").is_some());
        assert!(parse_origin("http://localhost:5173").is_some());
        assert!(parse_origin("app.example.com").is_none());
        assert!(parse_origin("https://").is_none());
        assert!(parse_origin("https://bad\norigin").is_none());
    }

    #[test]
    fn test_invalid_cors_origin_reported() {
        let config = HttpServerConfig {
            cors_origins: vec!["https://ok.example".into(), "not an origin".into()],
            ..Default::default()
        };
        assert_eq!(config.invalid_cors_origin(), Some("not an origin"));
        assert_eq!(HttpServerConfig::default().invalid_cors_origin(), None);
    }
}
