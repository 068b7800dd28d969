//! Typed identifier for devices.
//!
//! Device ids are small positive integers handed out by the registry, not
//! random UUIDs, because they appear in URLs and in the telemetry payload
//! polled by microcontrollers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u32);

impl DeviceId {
    /// The id given to the first device of an empty registry.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw integer id.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// The id that follows the current maximum `current`, or [`Self::FIRST`]
    /// when there is none.
    #[must_use]
    pub fn next_after(current: Option<Self>) -> Self {
        current.map_or(Self::FIRST, |id| Self(id.0 + 1))
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Failure to parse a [`DeviceId`] from a path segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDeviceIdError {
    /// Not an integer at all.
    #[error("device id is not an integer")]
    NotAnInteger(#[from] ParseIntError),
    /// Ids start at 1.
    #[error("device id must be positive")]
    Zero,
}

impl FromStr for DeviceId {
    type Err = ParseDeviceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>()? {
            0 => Err(ParseDeviceIdError::Zero),
            raw => Ok(Self(raw)),
        }
    }
}
