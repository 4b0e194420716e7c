//! Client configuration.
//!
//! The service address is configuration, not behavior: it lives here as a
//! constructor parameter with a documented default rather than a global.

use std::time::Duration;

/// Production endpoint of the live MEA service.
pub const DEFAULT_ENDPOINT: &str = "livemeaservice2.alpvision.com:443";

/// Configuration for [`LiveMea`](crate::LiveMea).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Client name used as a logging prefix.
    pub name: String,
    /// Service address (`host:port`).
    pub endpoint: String,
    /// Bound on establishing the transport connection.
    pub connect_timeout: Duration,
    /// Bound on waiting for the single `livedata` frame after selecting a
    /// device. The wire protocol has no other liveness signal, so expiry is
    /// treated as a connection failure.
    pub frame_timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Self {
        Self {
            name: "mealive".to_string(),
            endpoint: endpoint.to_string(),
            connect_timeout: Duration::from_secs(10),
            frame_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_frame_timeout(mut self, timeout: Duration) -> Self {
        self.frame_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
