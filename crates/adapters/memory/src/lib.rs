//! # gpiohub-adapter-memory
//!
//! In-memory implementation of the [`DeviceRegistry`] port.
//!
//! The registry lives for the lifetime of the process and is lost on restart.
//! It is constructed by the composition root and shared with the HTTP layer
//! through the application service; nothing reaches it through globals.
//!
//! ## Locking
//! Every operation takes the same [`Mutex`] for its whole duration, so a
//! toggle racing a delete on the same id sees either the device or its
//! absence, never a half-applied change.
//!
//! ## Dependency rule
//! Depends on `gpiohub-app` (port traits) and `gpiohub-domain` only.

mod error;

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use gpiohub_app::ports::DeviceRegistry;
use gpiohub_domain::device::{Device, NewDevice, PowerState};
use gpiohub_domain::error::GpioHubError;
use gpiohub_domain::id::DeviceId;

pub use error::RegistryError;

/// Process-wide device store.
///
/// A new id is always above every id still present, so ordering by id is
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRegistry {
    devices: Mutex<BTreeMap<DeviceId, Device>>,
}

impl InMemoryDeviceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<DeviceId, Device>>, RegistryError> {
        self.devices.lock().map_err(|_| RegistryError::Poisoned)
    }
}

impl DeviceRegistry for InMemoryDeviceRegistry {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Device>, GpioHubError>> + Send {
        let result = self
            .lock()
            .map(|devices| devices.values().cloned().collect::<Vec<_>>())
            .map_err(GpioHubError::from);
        async { result }
    }

    fn add(&self, device: NewDevice) -> impl Future<Output = Result<Device, GpioHubError>> + Send {
        let result = self
            .lock()
            .map(|mut devices| {
                let id = DeviceId::next_after(devices.keys().next_back().copied());
                let device = Device::from_new(id, device);
                devices.insert(id, device.clone());
                tracing::trace!(%id, total = devices.len(), "inserted device");
                device
            })
            .map_err(GpioHubError::from);
        async { result }
    }

    fn toggle(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GpioHubError>> + Send {
        let result = self
            .lock()
            .map(|mut devices| {
                devices.get_mut(&id).map(|device| {
                    device.toggle();
                    device.clone()
                })
            })
            .map_err(GpioHubError::from);
        async { result }
    }

    fn delete(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GpioHubError>> + Send {
        let result = self
            .lock()
            .map(|mut devices| devices.remove(&id))
            .map_err(GpioHubError::from);
        async { result }
    }

    fn emergency_off(&self) -> impl Future<Output = Result<usize, GpioHubError>> + Send {
        let result = self
            .lock()
            .map(|mut devices| {
                let mut switched: usize = 0;
                for device in devices.values_mut() {
                    if device.state.is_on() {
                        switched += 1;
                    }
                    device.state = PowerState::Off;
                }
                switched
            })
            .map_err(GpioHubError::from);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gpiohub_domain::device::Gpio;
    use gpiohub_domain::kind::DeviceKind;

    fn new_device(name: &str, kind: &str, gpio: impl Into<Gpio>) -> NewDevice {
        NewDevice::builder()
            .name(name)
            .kind(kind)
            .gpio(gpio)
            .build()
            .unwrap()
    }

    async fn seeded() -> InMemoryDeviceRegistry {
        let registry = InMemoryDeviceRegistry::new();
        registry.add(new_device("Fan", "Fan", 5_u32)).await.unwrap();
        registry
            .add(new_device("Light", "Light", 6_u32))
            .await
            .unwrap();
        registry
    }

    fn ids(devices: &[Device]) -> Vec<u32> {
        devices.iter().map(|d| d.id.as_raw()).collect()
    }

    #[tokio::test]
    async fn should_assign_first_id_when_empty() {
        let registry = InMemoryDeviceRegistry::new();
        let created = registry.add(new_device("Fan", "Fan", 5_u32)).await.unwrap();
        assert_eq!(created.id, DeviceId::FIRST);
        assert_eq!(created.state, PowerState::Off);
    }

    #[tokio::test]
    async fn should_list_devices_in_insertion_order() {
        let registry = seeded().await;
        registry.add(new_device("TV", "TV", "9")).await.unwrap();

        let all = registry.list_all().await.unwrap();
        assert_eq!(ids(&all), vec![1, 2, 3]);
        assert_eq!(all[2].kind, DeviceKind::Tv);
    }

    #[tokio::test]
    async fn should_not_reuse_deleted_id_below_the_maximum() {
        let registry = seeded().await;
        registry.delete(DeviceId::from_raw(1)).await.unwrap();

        let created = registry.add(new_device("Motor", "Motor", "3")).await.unwrap();
        assert_eq!(created.id, DeviceId::from_raw(3));
    }

    #[tokio::test]
    async fn should_follow_current_maximum_after_deleting_the_top_id() {
        let registry = seeded().await;
        registry.delete(DeviceId::from_raw(2)).await.unwrap();

        let created = registry.add(new_device("Fridge", "Fridge", "8")).await.unwrap();
        assert_eq!(created.id, DeviceId::from_raw(2));
    }

    #[tokio::test]
    async fn should_toggle_existing_device() {
        let registry = seeded().await;
        let toggled = registry.toggle(DeviceId::from_raw(2)).await.unwrap().unwrap();
        assert_eq!(toggled.state, PowerState::On);

        let all = registry.list_all().await.unwrap();
        assert_eq!(all[1].state, PowerState::On);
        assert_eq!(all[0].state, PowerState::Off);
    }

    #[tokio::test]
    async fn should_ignore_toggle_and_delete_of_missing_id() {
        let registry = seeded().await;
        let before = registry.list_all().await.unwrap();

        assert!(registry.toggle(DeviceId::from_raw(42)).await.unwrap().is_none());
        assert!(registry.delete(DeviceId::from_raw(42)).await.unwrap().is_none());

        assert_eq!(registry.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn should_return_removed_device_on_delete() {
        let registry = seeded().await;
        let removed = registry.delete(DeviceId::from_raw(1)).await.unwrap().unwrap();
        assert_eq!(removed.name, "Fan");
        assert_eq!(ids(&registry.list_all().await.unwrap()), vec![2]);
    }

    #[tokio::test]
    async fn should_switch_everything_off() {
        let registry = seeded().await;
        registry.toggle(DeviceId::from_raw(1)).await.unwrap();

        assert_eq!(registry.emergency_off().await.unwrap(), 1);
        assert_eq!(registry.emergency_off().await.unwrap(), 0);
        let all = registry.list_all().await.unwrap();
        assert!(all.iter().all(|d| d.state == PowerState::Off));
    }

    #[test]
    fn should_keep_ids_unique_under_concurrent_adds() {
        let registry = Arc::new(InMemoryDeviceRegistry::new());

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    let rt = tokio::runtime::Builder::new_current_thread()
                        .build()
                        .unwrap();
                    rt.block_on(async {
                        for n in 0..25 {
                            let name = format!("worker-{worker}-{n}");
                            registry.add(new_device(&name, "Other", "1")).await.unwrap();
                        }
                    });
                });
            }
        });

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let all = rt.block_on(registry.list_all()).unwrap();
        assert_eq!(all.len(), 200);
        assert_eq!(ids(&all), (1..=200).collect::<Vec<_>>());
    }
}
