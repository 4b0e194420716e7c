//! Live-data frame decoding.
//!
//! One `livedata` event body carries every device's samples in a single flat
//! buffer of little-endian f32 values:
//!
//! ```text
//! device 1, electrode 0:  4096 samples
//! device 1, electrode 1:  4096 samples
//! ...
//! device 1, electrode 31: 4096 samples
//! device 2, electrode 0:  4096 samples
//! ...
//! device 4, electrode 31: 4096 samples
//! ```
//!
//! 4 devices x 32 electrodes x 4096 samples = 524288 samples total. Any
//! other length is a protocol violation and rejected outright.
//!
//! Decoding is pure: values pass through unmodified, with no scaling or unit
//! conversion, and identical input always yields identical output.

use crate::device::MeaId;
use thiserror::Error;

/// Number of physical devices multiplexed into one frame.
pub const DEVICE_COUNT: usize = 4;

/// Electrodes per device.
pub const ELECTRODES_PER_DEVICE: usize = 32;

/// Samples per electrode per frame.
pub const SAMPLES_PER_ELECTRODE: usize = 4096;

/// Total f32 samples in a well-formed frame (128 x 4096).
pub const TOTAL_SAMPLES: usize = DEVICE_COUNT * ELECTRODES_PER_DEVICE * SAMPLES_PER_ELECTRODE;

/// Byte length of a well-formed frame body.
pub const FRAME_BYTES: usize = TOTAL_SAMPLES * 4;

/// Errors during event or frame decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("event truncated while reading {0}")]
    Truncated(&'static str),
    #[error("invalid UTF-8 in event name")]
    InvalidUtf8,
    #[error("event body of {actual} bytes exceeds the {max} byte limit")]
    BodyTooLarge { actual: usize, max: usize },
    #[error("live frame is {actual} bytes, expected {expected}")]
    BadFrameSize { expected: usize, actual: usize },
    #[error("live frame holds {actual} samples, expected {expected}")]
    BadSampleCount { expected: usize, actual: usize },
}

/// Reinterpret a raw `livedata` body as f32 samples.
///
/// The byte length must be exactly [`FRAME_BYTES`]; a short or misaligned
/// buffer indicates a protocol or version mismatch.
pub fn samples_from_bytes(raw: &[u8]) -> Result<Vec<f32>, FrameError> {
    if raw.len() != FRAME_BYTES {
        return Err(FrameError::BadFrameSize {
            expected: FRAME_BYTES,
            actual: raw.len(),
        });
    }
    Ok(raw
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Slice one device's electrodes out of the flat sample buffer.
///
/// Returns 32 rows of 4096 samples, electrode 0 first, in transmitted order.
pub fn electrode_matrix(samples: &[f32], id: MeaId) -> Result<Vec<Vec<f32>>, FrameError> {
    if samples.len() != TOTAL_SAMPLES {
        return Err(FrameError::BadSampleCount {
            expected: TOTAL_SAMPLES,
            actual: samples.len(),
        });
    }

    let start = id.wire_index() as usize * ELECTRODES_PER_DEVICE * SAMPLES_PER_ELECTRODE;
    Ok((0..ELECTRODES_PER_DEVICE)
        .map(|row| {
            let lo = start + row * SAMPLES_PER_ELECTRODE;
            samples[lo..lo + SAMPLES_PER_ELECTRODE].to_vec()
        })
        .collect())
}

/// Decode a raw `livedata` body into one device's electrode matrix.
pub fn decode_live_frame(raw: &[u8], id: MeaId) -> Result<Vec<Vec<f32>>, FrameError> {
    let samples = samples_from_bytes(raw)?;
    electrode_matrix(&samples, id)
}
