//! Device: a named appliance wired to a GPIO pin with an on/off state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GpioHubError, ValidationError};
use crate::id::DeviceId;
use crate::kind::DeviceKind;

/// Binary power state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// The opposite state.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// Pin identifier as supplied by whoever registered the device.
///
/// Compiled-in devices use numeric pins; pins entered through the dashboard
/// are kept as the submitted text. Neither form is validated or checked for
/// clashes with other devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gpio {
    Pin(u32),
    Label(String),
}

impl fmt::Display for Gpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(pin) => pin.fmt(f),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<u32> for Gpio {
    fn from(pin: u32) -> Self {
        Self::Pin(pin)
    }
}

impl From<&str> for Gpio {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Gpio {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// A controllable device held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub image: String,
    pub state: PowerState,
    pub gpio: Gpio,
}

impl Device {
    /// Materialize a validated request under the id chosen by the registry.
    /// New devices always start [`PowerState::Off`].
    #[must_use]
    pub fn from_new(id: DeviceId, new: NewDevice) -> Self {
        Self {
            id,
            name: new.name,
            kind: new.kind,
            image: new.image,
            state: PowerState::Off,
            gpio: new.gpio,
        }
    }

    /// Flip between on and off.
    pub fn toggle(&mut self) {
        self.state = self.state.flipped();
    }
}

/// A validated device-creation request, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub name: String,
    pub kind: DeviceKind,
    pub image: String,
    pub gpio: Gpio,
}

impl NewDevice {
    /// Create a builder for constructing a [`NewDevice`].
    #[must_use]
    pub fn builder() -> NewDeviceBuilder {
        NewDeviceBuilder::default()
    }
}

/// Step-by-step builder for [`NewDevice`].
///
/// Mirrors the loosely-typed add form: the kind arrives as a free label and
/// the image is optional.
#[derive(Debug, Default)]
pub struct NewDeviceBuilder {
    name: Option<String>,
    kind: Option<String>,
    image: Option<String>,
    gpio: Option<Gpio>,
}

impl NewDeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, label: impl Into<String>) -> Self {
        self.kind = Some(label.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn gpio(mut self, gpio: impl Into<Gpio>) -> Self {
        self.gpio = Some(gpio.into());
        self
    }

    /// Consume the builder, check presence of required fields, and resolve
    /// the icon.
    ///
    /// A blank or missing image resolves to the kind's default icon; an
    /// unrecognized kind label resolves to [`DeviceKind::Other`].
    ///
    /// # Errors
    ///
    /// Returns [`GpioHubError::Validation`] if `name`, `gpio`, or `kind` is
    /// missing or blank.
    pub fn build(self) -> Result<NewDevice, GpioHubError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationError::MissingField("name"))?;
        let gpio = self
            .gpio
            .filter(|gpio| !matches!(gpio, Gpio::Label(label) if label.trim().is_empty()))
            .ok_or(ValidationError::MissingField("gpio"))?;
        let label = self
            .kind
            .filter(|label| !label.trim().is_empty())
            .ok_or(ValidationError::MissingField("type"))?;

        let kind = DeviceKind::from_label(&label);
        let image = self
            .image
            .map(|image| image.trim().to_string())
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| kind.default_icon().to_string());

        Ok(NewDevice {
            name,
            kind,
            image,
            gpio,
        })
    }
}
