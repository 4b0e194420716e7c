//! Client error taxonomy.

use meaproto::{FrameError, InvalidMeaId};
use thiserror::Error;

/// Everything a recording call can fail with.
///
/// All variants surface directly to the caller; nothing is retried or
/// swallowed inside the client. Transport teardown happens before any of
/// these are returned.
#[derive(Debug, Error)]
pub enum MeaError {
    /// Device id outside 1-4. Raised before any network activity.
    #[error(transparent)]
    InvalidMeaId(#[from] InvalidMeaId),

    /// Transport failed to connect, failed mid-session, or produced no
    /// frame within the configured timeout. Carries the transport's
    /// diagnostic text.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Received frame does not match the fixed 128 x 4096 f32 layout -
    /// a protocol or version mismatch. Retrying the session is the
    /// caller's call.
    #[error("malformed live frame: {0}")]
    MalformedFrame(#[from] FrameError),
}

impl MeaError {
    pub(crate) fn connection(err: impl std::fmt::Display) -> Self {
        Self::Connection(err.to_string())
    }
}
