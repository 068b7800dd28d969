//! Registry port: the store holding every device record.

use std::future::Future;

use gpiohub_domain::device::{Device, NewDevice};
use gpiohub_domain::error::GpioHubError;
use gpiohub_domain::id::DeviceId;

/// Store of device records keyed by [`DeviceId`].
///
/// Implementations assign ids themselves (current maximum + 1, or 1 when
/// empty) and treat unknown ids as no-ops rather than errors. Each method
/// must be atomic with respect to the others.
pub trait DeviceRegistry {
    /// Every device, in insertion order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Device>, GpioHubError>> + Send;

    /// Insert a new device switched off and return it with its assigned id.
    fn add(&self, device: NewDevice) -> impl Future<Output = Result<Device, GpioHubError>> + Send;

    /// Flip the power state of `id`, returning the updated device or `None`
    /// when no such device exists.
    fn toggle(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GpioHubError>> + Send;

    /// Remove `id`, returning the removed device or `None` when absent.
    fn delete(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GpioHubError>> + Send;

    /// Switch every device off, returning how many were on.
    fn emergency_off(&self) -> impl Future<Output = Result<usize, GpioHubError>> + Send;
}

impl<T: DeviceRegistry + Send + Sync> DeviceRegistry for std::sync::Arc<T> {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Device>, GpioHubError>> + Send {
        (**self).list_all()
    }

    fn add(&self, device: NewDevice) -> impl Future<Output = Result<Device, GpioHubError>> + Send {
        (**self).add(device)
    }

    fn toggle(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GpioHubError>> + Send {
        (**self).toggle(id)
    }

    fn delete(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GpioHubError>> + Send {
        (**self).delete(id)
    }

    fn emergency_off(&self) -> impl Future<Output = Result<usize, GpioHubError>> + Send {
        (**self).emergency_off()
    }
}
