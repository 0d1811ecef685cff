//! Server configuration from environment variables.
//!
//! `.env` files are loaded by `main` before this runs, so both real
//! environment variables and dotenv entries are visible here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SITE_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Runtime settings for the static site host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory holding the compiled client bundle (`index.html`, wasm, css).
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let site_dir = lookup("SITE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        Ok(Self { bind_addr, port, site_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
