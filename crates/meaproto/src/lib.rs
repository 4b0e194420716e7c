//! meaproto - wire protocol for the live MEA streaming service
//!
//! This crate defines everything that crosses the wire between a client and
//! the live multi-electrode array (MEA) service, plus the pure decoding step
//! that turns a raw service frame into per-electrode data.
//!
//! ## Protocol
//!
//! The service speaks a named-event channel. A session uses exactly two
//! events:
//!
//! - `meaid` (client -> service): selects which of the four physical devices
//!   to stream. The body is a single byte holding the zero-based device
//!   index. Callers always work with the 1-based [`MeaId`]; the zero-based
//!   form exists only on the wire.
//! - `livedata` (service -> client): one complete frame of samples for all
//!   devices at once, as little-endian f32 values.
//!
//! The `event` module defines the framing for these events, the `frame`
//! module the layout and decoding of the `livedata` body.
//!
//! ## Frame Layout
//!
//! A live frame is a flat buffer of 128 x 4096 f32 samples: four devices,
//! 32 electrodes each, concatenated device-ascending then
//! electrode-ascending. [`decode_live_frame`] slices out one device's 32
//! electrodes and reshapes them into rows of 4096 samples.

pub mod device;
pub mod event;
pub mod frame;

pub use device::{InvalidMeaId, MeaId};
pub use event::{EventFrame, EVENT_LIVE_DATA, EVENT_MEA_SELECT, MAX_BODY_BYTES};
pub use frame::{
    decode_live_frame, electrode_matrix, samples_from_bytes, FrameError, DEVICE_COUNT,
    ELECTRODES_PER_DEVICE, FRAME_BYTES, SAMPLES_PER_ELECTRODE, TOTAL_SAMPLES,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One decoded recording from a single device.
///
/// The timestamp is stamped by the client when the frame is decoded - it is
/// the time of receipt, not the time of acquisition; the service supplies no
/// timing information of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveData {
    /// When the frame was received and decoded.
    pub timestamp: DateTime<Utc>,
    /// 32 electrode rows of 4096 samples each, in transmitted order.
    pub data: Vec<Vec<f32>>,
}
