//! Dashboard form targets for device control (PRG pattern).
//!
//! Every handler ends in a redirect to `/`, whether or not the id it was
//! given still exists.

use std::str::FromStr;

use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use gpiohub_app::ports::DeviceRegistry;
use gpiohub_domain::device::NewDevice;
use gpiohub_domain::error::GpioHubError;
use gpiohub_domain::id::DeviceId;

use super::DashboardError;
use crate::state::AppState;

/// Fields posted by the add-device form. All optional at the wire level;
/// presence is checked when converting into a [`NewDevice`].
#[derive(Debug, Default, Deserialize)]
pub struct AddDeviceForm {
    pub button_name: Option<String>,
    pub gpio: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image: Option<String>,
}

impl TryFrom<AddDeviceForm> for NewDevice {
    type Error = GpioHubError;

    fn try_from(form: AddDeviceForm) -> Result<Self, Self::Error> {
        let mut builder = NewDevice::builder();
        if let Some(name) = form.button_name {
            builder = builder.name(name);
        }
        if let Some(gpio) = form.gpio {
            builder = builder.gpio(gpio);
        }
        if let Some(kind) = form.kind {
            builder = builder.kind(kind);
        }
        if let Some(image) = form.image {
            builder = builder.image(image);
        }
        builder.build()
    }
}

fn parse_id(raw: &str) -> Result<DeviceId, DashboardError> {
    DeviceId::from_str(raw).map_err(|_| DashboardError::NotFound)
}

fn back_home() -> Redirect {
    Redirect::to("/")
}

/// `POST /add`: register a device from the add form.
pub async fn add<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<AddDeviceForm>,
) -> Result<Redirect, DashboardError>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    let device = NewDevice::try_from(form)?;
    state.device_service.add_device(device).await?;
    Ok(back_home())
}

/// `POST /toggle/{id}`: flip a device on or off.
pub async fn toggle<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Redirect, DashboardError>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    state.device_service.toggle_device(device_id).await?;
    Ok(back_home())
}

/// `POST /delete/{id}`: remove a device.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Redirect, DashboardError>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    state.device_service.delete_device(device_id).await?;
    Ok(back_home())
}

/// `POST /emergency_off`: switch every device off.
pub async fn emergency_off<R>(
    State(state): State<AppState<R>>,
) -> Result<Redirect, DashboardError>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    state.device_service.emergency_off().await?;
    Ok(back_home())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpiohub_domain::device::Gpio;
    use gpiohub_domain::error::ValidationError;
    use gpiohub_domain::kind::DeviceKind;

    fn form(name: &str, gpio: &str, kind: &str) -> AddDeviceForm {
        AddDeviceForm {
            button_name: Some(name.to_string()),
            gpio: Some(gpio.to_string()),
            kind: Some(kind.to_string()),
            image: None,
        }
    }

    #[test]
    fn should_accept_form_without_image_field() {
        let new = NewDevice::try_from(form("Cooler", "7", "Cooler")).unwrap();
        assert_eq!(new.gpio, Gpio::Label("7".to_string()));
        assert_eq!(new.image, DeviceKind::Cooler.default_icon());
    }

    #[test]
    fn should_reject_form_without_name() {
        let mut incomplete = form("", "7", "Fan");
        incomplete.button_name = None;
        assert!(matches!(
            NewDevice::try_from(incomplete),
            Err(GpioHubError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[test]
    fn should_reject_form_with_blank_gpio() {
        assert!(matches!(
            NewDevice::try_from(form("Fan", " ", "Fan")),
            Err(GpioHubError::Validation(ValidationError::MissingField("gpio")))
        ));
    }

    #[test]
    fn should_reject_non_numeric_id_segment() {
        assert!(matches!(parse_id("abc"), Err(DashboardError::NotFound)));
        assert!(matches!(parse_id("0"), Err(DashboardError::NotFound)));
        assert_eq!(parse_id("12").unwrap(), DeviceId::from_raw(12));
    }
}
