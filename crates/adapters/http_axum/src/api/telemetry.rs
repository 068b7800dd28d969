//! Read-only telemetry for microcontrollers and monitors.

use axum::Json;
use axum::extract::State;

use gpiohub_app::ports::DeviceRegistry;
use gpiohub_domain::telemetry::Telemetry;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /get_state`: `{"<id>": {"gpio": …, "state": "ON"|"OFF"}}` for
/// every device.
pub async fn get_state<R>(State(state): State<AppState<R>>) -> Result<Json<Telemetry>, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    let telemetry = state.device_service.telemetry().await?;
    Ok(Json(telemetry))
}
