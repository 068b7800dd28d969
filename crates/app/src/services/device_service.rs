//! Device service: use-cases for controlling devices.

use gpiohub_domain::device::{Device, Gpio, NewDevice};
use gpiohub_domain::error::GpioHubError;
use gpiohub_domain::id::DeviceId;
use gpiohub_domain::kind::DeviceKind;
use gpiohub_domain::telemetry::Telemetry;

use crate::ports::DeviceRegistry;

/// Application service for device operations.
pub struct DeviceService<R> {
    registry: R,
}

impl<R: DeviceRegistry> DeviceService<R> {
    /// Create a new service backed by the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Load the compiled-in starter devices (a fan on pin 5 and a light on
    /// pin 6) when the registry is empty. Does nothing otherwise.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    #[tracing::instrument(skip(self))]
    pub async fn seed_defaults(&self) -> Result<Vec<Device>, GpioHubError> {
        if !self.registry.list_all().await?.is_empty() {
            return Ok(Vec::new());
        }

        let mut seeded = Vec::new();
        for (kind, pin) in [(DeviceKind::Fan, 5), (DeviceKind::Light, 6)] {
            let new = NewDevice::builder()
                .name(kind.label())
                .kind(kind.label())
                .gpio(Gpio::Pin(pin))
                .build()?;
            seeded.push(self.registry.add(new).await?);
        }
        tracing::info!(count = seeded.len(), "seeded default devices");
        Ok(seeded)
    }

    /// List all devices in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn list_devices(&self) -> Result<Vec<Device>, GpioHubError> {
        self.registry.list_all().await
    }

    /// Register a new device. It starts switched off.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name, kind = %device.kind))]
    pub async fn add_device(&self, device: NewDevice) -> Result<Device, GpioHubError> {
        let created = self.registry.add(device).await?;
        tracing::info!(id = %created.id, "device added");
        Ok(created)
    }

    /// Flip a device on or off. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(&self, id: DeviceId) -> Result<Option<Device>, GpioHubError> {
        let toggled = self.registry.toggle(id).await?;
        match &toggled {
            Some(device) => tracing::info!(state = %device.state, "device toggled"),
            None => tracing::debug!("toggle ignored, no such device"),
        }
        Ok(toggled)
    }

    /// Remove a device. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<Option<Device>, GpioHubError> {
        let removed = self.registry.delete(id).await?;
        match &removed {
            Some(_) => tracing::info!("device deleted"),
            None => tracing::debug!("delete ignored, no such device"),
        }
        Ok(removed)
    }

    /// Switch every device off.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    #[tracing::instrument(skip(self))]
    pub async fn emergency_off(&self) -> Result<usize, GpioHubError> {
        let switched = self.registry.emergency_off().await?;
        tracing::warn!(switched, "emergency off");
        Ok(switched)
    }

    /// Pin and state of every device, for external monitors.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn telemetry(&self) -> Result<Telemetry, GpioHubError> {
        let devices = self.registry.list_all().await?;
        Ok(devices.iter().collect())
    }
}
