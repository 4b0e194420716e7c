//! mealive - async client for the live MEA streaming service
//!
//! The service multiplexes four physical multi-electrode array (MEA) devices
//! onto one event channel. A recording session connects, selects a device,
//! receives exactly one frame holding every device's samples, and tears the
//! connection down. This crate owns that session lifecycle and hands back
//! the selected device's data as a 32 x 4096 electrode matrix, timestamped
//! at receipt.
//!
//! ## Usage
//!
//! ```ignore
//! let client = LiveMea::default();
//! let sample = client.record_sample(1).await?;       // one LiveData
//! let run = client.record_n_samples(1, 10).await?;   // ten, in order
//! ```
//!
//! Every sample uses a fresh connection; nothing is pooled or shared across
//! sessions, so device selection on the service side is never ambiguous.
//! Alternate transports (including test doubles) plug in through the
//! [`Connector`] and [`Transport`] traits.

mod recorder;
mod session;

pub mod config;
pub mod error;
pub mod tcp;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::MeaError;
pub use meaproto::{LiveData, MeaId};
pub use tcp::{TcpConnector, TcpTransport};
pub use transport::{Connector, Transport};

/// Client handle for the live MEA service.
///
/// Cheap to construct and holds no connection of its own; each recording
/// call opens and closes its own transport.
pub struct LiveMea<C: Connector = TcpConnector> {
    config: ClientConfig,
    connector: C,
}

impl LiveMea<TcpConnector> {
    /// Client using the TCP transport with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_connector(config, TcpConnector)
    }
}

impl Default for LiveMea<TcpConnector> {
    /// Client pointed at [`DEFAULT_ENDPOINT`] with default timeouts.
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<C: Connector> LiveMea<C> {
    /// Client over a custom transport.
    pub fn with_connector(config: ClientConfig, connector: C) -> Self {
        Self { config, connector }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Record a single sample from device `mea_id` (1-4).
    ///
    /// Validates the id before any network activity, then runs one full
    /// session: connect, select, await one frame, disconnect. Fails with
    /// [`MeaError::InvalidMeaId`], [`MeaError::Connection`], or
    /// [`MeaError::MalformedFrame`]; the transport is closed on every path.
    pub async fn record_sample(&self, mea_id: u8) -> Result<LiveData, MeaError> {
        let id = MeaId::new(mea_id)?;
        session::open_session(&self.connector, &self.config, id).await
    }

    /// Record `n` samples from device `mea_id` (1-4), serially.
    ///
    /// Sessions run one at a time; sample `i` fully completes, including
    /// transport teardown, before session `i + 1` begins. The first failing
    /// session aborts the run and discards any samples already collected.
    /// `n = 0` returns an empty vec without touching the network.
    pub async fn record_n_samples(&self, mea_id: u8, n: usize) -> Result<Vec<LiveData>, MeaError> {
        let id = MeaId::new(mea_id)?;
        recorder::record_n(&self.connector, &self.config, id, n).await
    }
}
