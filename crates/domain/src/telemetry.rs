//! Telemetry projection: the reduced `{gpio, state}` view polled by
//! microcontrollers and monitors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::device::{Device, Gpio, PowerState};
use crate::id::DeviceId;

/// Pin and power state of a single device. Nothing else leaks through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryEntry {
    pub gpio: Gpio,
    pub state: PowerState,
}

impl From<&Device> for TelemetryEntry {
    fn from(device: &Device) -> Self {
        Self {
            gpio: device.gpio.clone(),
            state: device.state,
        }
    }
}

/// Telemetry for every device, keyed by id.
///
/// Serializes as a JSON object whose keys are the decimal ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Telemetry(BTreeMap<DeviceId, TelemetryEntry>);

impl Telemetry {
    #[must_use]
    pub fn get(&self, id: DeviceId) -> Option<&TelemetryEntry> {
        self.0.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a Device> for Telemetry {
    fn from_iter<I: IntoIterator<Item = &'a Device>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|device| (device.id, TelemetryEntry::from(device)))
                .collect(),
        )
    }
}
