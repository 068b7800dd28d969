//! Registry-specific error type.

use gpiohub_domain::error::GpioHubError;

/// Errors originating from the in-memory registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A thread panicked while holding the registry lock.
    #[error("device registry lock poisoned")]
    Poisoned,
}

impl From<RegistryError> for GpioHubError {
    fn from(err: RegistryError) -> Self {
        Self::Storage(Box::new(err))
    }
}
