//! Device kind: the fixed catalogue of device types and their default icons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of appliance a device controls.
///
/// Only used to pick an icon when the user does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Fan,
    Light,
    Cooler,
    #[serde(rename = "AC")]
    Ac,
    Fridge,
    #[serde(rename = "TV")]
    Tv,
    Camera,
    Motor,
    Other,
}

impl DeviceKind {
    /// Every kind, in the order offered by the add-device form.
    pub const ALL: [Self; 9] = [
        Self::Fan,
        Self::Light,
        Self::Cooler,
        Self::Ac,
        Self::Fridge,
        Self::Tv,
        Self::Camera,
        Self::Motor,
        Self::Other,
    ];

    /// Resolve a user-supplied label, falling back to [`Other`](Self::Other)
    /// for anything outside the catalogue. Matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .unwrap_or(Self::Other)
    }

    /// Canonical label, as shown in the UI and accepted by [`from_label`](Self::from_label).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fan => "Fan",
            Self::Light => "Light",
            Self::Cooler => "Cooler",
            Self::Ac => "AC",
            Self::Fridge => "Fridge",
            Self::Tv => "TV",
            Self::Camera => "Camera",
            Self::Motor => "Motor",
            Self::Other => "Other",
        }
    }

    /// Icon URL used when a device has no custom image.
    #[must_use]
    pub fn default_icon(self) -> &'static str {
        match self {
            Self::Fan => "https://img.icons8.com/ios-filled/100/fan.png",
            Self::Light => "https://img.icons8.com/ios-filled/100/light-on.png",
            Self::Cooler | Self::Ac => "https://img.icons8.com/ios-filled/100/air-conditioner.png",
            Self::Fridge => "https://img.icons8.com/ios-filled/100/fridge.png",
            Self::Tv => "https://img.icons8.com/ios-filled/100/tv.png",
            Self::Camera => "https://img.icons8.com/ios-filled/100/camera.png",
            Self::Motor => "https://img.icons8.com/ios-filled/100/motor.png",
            Self::Other => "https://img.icons8.com/ios-filled/100/smart-home-connection.png",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
