//! Configuration for pipeline-demo

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the listen port.
pub const PORT_VAR: &str = "PORT";

/// Primary environment variable naming the deployment environment.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Legacy environment variable honored for compatibility with existing
/// deployment env files.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment label, e.g. "development" or "production"
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load config from the process environment.
    ///
    /// `PORT` selects the listen port; `APP_ENV` (falling back to `NODE_ENV`)
    /// selects the environment label. Missing variables fall back to
    /// defaults; a `PORT` that does not parse as a port number is an error.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var(PORT_VAR) {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("invalid {}: {:?}", PORT_VAR, raw)))?,
            Err(_) => default_port(),
        };

        let environment = std::env::var(APP_ENV_VAR)
            .or_else(|_| std::env::var(NODE_ENV_VAR))
            .unwrap_or_else(|_| default_environment());

        Ok(Self { port, environment })
    }

    /// Listen address for the HTTP server (all interfaces).
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

// Default value functions

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}
