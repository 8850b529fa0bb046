//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_residents: bool,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with the system clock and no demo
    /// residents.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_residents: false,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Load the demo residents into the list before serving.
    #[must_use]
    pub fn with_seed_residents(mut self, seed: bool) -> Self {
        self.seed_residents = seed;
        self
    }

    /// Replace the clock used for move-in checks and visitor timestamps.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Production always runs on the system clock")
    )]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
