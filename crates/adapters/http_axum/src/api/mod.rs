//! JSON handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod telemetry;

use axum::Router;
use axum::routing::get;

use gpiohub_app::ports::DeviceRegistry;

use crate::state::AppState;

/// Build the JSON sub-router.
///
/// The telemetry path is fixed by the firmware that polls it, so it lives at
/// the root rather than under an `/api` prefix.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    Router::new().route("/get_state", get(telemetry::get_state::<R>))
}
