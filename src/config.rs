// Configuration module
// Loads runtime settings from environment variables, falling back to defaults.

use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from `APP_HOST` and `APP_PORT`.
    ///
    /// Missing or unparseable values fall back to the defaults
    /// (`0.0.0.0:8080`); loading never fails.
    #[must_use]
    pub fn load() -> Self {
        Self {
            server: ServerConfig {
                host: env_string("APP_HOST", DEFAULT_HOST),
                port: env_port("APP_PORT", DEFAULT_PORT),
            },
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| AppError::InvalidAddress(e.to_string()))
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
