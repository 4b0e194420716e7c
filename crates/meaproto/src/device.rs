//! Device identity.
//!
//! The service hosts four physical MEA devices. Callers name them with a
//! 1-based id; the wire uses a zero-based index. [`MeaId`] enforces the valid
//! range at construction so everything downstream can assume a good id, and
//! keeps the zero-based form private to the protocol layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected device id - outside the range 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("MEA id must be in the range 1-4, got {0}")]
pub struct InvalidMeaId(pub u8);

/// Validated 1-based id of a physical MEA device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MeaId(u8);

impl MeaId {
    /// Lowest valid id.
    pub const MIN: u8 = 1;
    /// Highest valid id (the service hosts four devices).
    pub const MAX: u8 = crate::frame::DEVICE_COUNT as u8;

    /// Validate a 1-based device id.
    pub fn new(id: u8) -> Result<Self, InvalidMeaId> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id))
        } else {
            Err(InvalidMeaId(id))
        }
    }

    /// The public 1-based id.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index sent on the wire in the `meaid` event.
    pub fn wire_index(self) -> u8 {
        self.0 - 1
    }
}

impl TryFrom<u8> for MeaId {
    type Error = InvalidMeaId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MeaId> for u8 {
    fn from(id: MeaId) -> Self {
        id.get()
    }
}

impl fmt::Display for MeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
