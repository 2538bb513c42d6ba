//! Configuration file
//!
//! ```json
//! {
//!   "data_dir": "./data",
//!   "server": { "host": "0.0.0.0", "port": 3000, "cors_origins": [], "graphiql": true }
//! }
//! ```
//!
//! Every key is optional. Command line flags override the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./gradebook.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the seed files (default "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit `config_path` must exist. Without one, the default path is
    /// read when present and built-in defaults apply otherwise. `data_dir`
    /// overrides whatever the file says.
    pub fn resolve(config_path: Option<&Path>, data_dir: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(dir) = data_dir {
            config.data_dir = dir.display().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if let Some(origin) = self.server.invalid_cors_origin() {
            return Err(CliError::config_error(format!(
                "server.cors_origins: invalid origin {:?}",
                origin
            )));
        }

        Ok(())
    }

    /// Data directory as a path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}
