//! Dashboard home page: every device as a card, plus the bulk and add controls.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use gpiohub_app::ports::DeviceRegistry;
use gpiohub_domain::device::Device;
use gpiohub_domain::kind::DeviceKind;

use super::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    devices: Vec<Device>,
    kinds: [DeviceKind; DeviceKind::ALL.len()],
}

/// `GET /`: the device list.
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<Html<String>, DashboardError>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;

    let page = HomeTemplate {
        devices,
        kinds: DeviceKind::ALL,
    };
    Ok(Html(page.render()?))
}
