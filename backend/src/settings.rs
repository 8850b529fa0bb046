//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SECURE_NEST_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SEED_RESIDENTS: bool = true;

/// Runtime configuration for the `secure-nest` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SECURE_NEST")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Load the demo residents at startup.
    pub seed_residents: Option<bool>,
}

impl AppSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 5000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether to seed the demo residents; on unless disabled.
    pub fn seed_residents(&self) -> bool {
        self.seed_residents.unwrap_or(DEFAULT_SEED_RESIDENTS)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns an error when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host(), self.port()).parse()
    }
}
