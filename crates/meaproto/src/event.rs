//! Named-event wire codec.
//!
//! The service channel is a stream of named events. Each event is framed
//! with fixed-width big-endian length fields ahead of the variable parts:
//!
//! ```text
//! u16 BE   event name length
//!          event name (UTF-8)
//! u32 BE   body length
//!          body bytes
//! ```
//!
//! Body length is capped at [`MAX_BODY_BYTES`] so a corrupt header cannot
//! drive an enormous allocation; a full live frame is 2 MiB and nothing else
//! comes close.

use bytes::{BufMut, Bytes, BytesMut};

use crate::device::MeaId;
use crate::frame::FrameError;

/// Client -> service: select which device to stream. Body is a single byte
/// holding the zero-based device index.
pub const EVENT_MEA_SELECT: &str = "meaid";

/// Service -> client: one complete frame of samples for all devices.
pub const EVENT_LIVE_DATA: &str = "livedata";

/// Upper bound on event body size.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// One named event with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFrame {
    pub name: String,
    pub body: Bytes,
}

impl EventFrame {
    pub fn new(name: impl Into<String>, body: Bytes) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Build the device-selection event for a validated id.
    pub fn select_device(id: MeaId) -> Self {
        Self::new(EVENT_MEA_SELECT, Bytes::copy_from_slice(&[id.wire_index()]))
    }

    /// Serialize to the wire form.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(2 + self.name.len() + 4 + self.body.len());
        buf.put_u16(self.name.len() as u16);
        buf.put_slice(self.name.as_bytes());
        buf.put_u32(self.body.len() as u32);
        buf.put_slice(&self.body);
        buf.freeze()
    }

    /// Parse one event from a buffer holding at least a full frame.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, FrameError> {
        if buf.len() < 2 {
            return Err(FrameError::Truncated("name length"));
        }
        let name_len = u16::from_be_bytes([buf[0], buf[1]]) as usize;

        let mut at = 2;
        if buf.len() < at + name_len {
            return Err(FrameError::Truncated("event name"));
        }
        let name = std::str::from_utf8(&buf[at..at + name_len])
            .map_err(|_| FrameError::InvalidUtf8)?
            .to_string();
        at += name_len;

        if buf.len() < at + 4 {
            return Err(FrameError::Truncated("body length"));
        }
        let body_len = u32::from_be_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]]) as usize;
        if body_len > MAX_BODY_BYTES {
            return Err(FrameError::BodyTooLarge {
                actual: body_len,
                max: MAX_BODY_BYTES,
            });
        }
        at += 4;

        if buf.len() < at + body_len {
            return Err(FrameError::Truncated("event body"));
        }
        Ok(Self {
            name,
            body: Bytes::copy_from_slice(&buf[at..at + body_len]),
        })
    }
}
