//! Server-side rendered HTML dashboard.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod home;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use gpiohub_app::ports::DeviceRegistry;
use gpiohub_domain::error::GpioHubError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages and their form targets.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceRegistry + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<R>))
        .route("/add", post(devices::add::<R>))
        .route("/toggle/{id}", post(devices::toggle::<R>))
        .route("/delete/{id}", post(devices::delete::<R>))
        .route("/emergency_off", post(devices::emergency_off::<R>))
}

/// Failure while serving a dashboard page or form submission.
#[derive(Debug)]
pub enum DashboardError {
    /// The service layer rejected or failed the request.
    Service(GpioHubError),
    /// The path did not name a device id.
    NotFound,
    /// The page template failed to render.
    Render(askama::Error),
}

impl From<GpioHubError> for DashboardError {
    fn from(err: GpioHubError) -> Self {
        Self::Service(err)
    }
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Service(GpioHubError::Validation(err)) => {
                tracing::debug!(error = %err, "rejected dashboard form");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Service(GpioHubError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            Self::Render(err) => {
                tracing::error!(error = %err, "template render error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => status.into_response(),
        }
    }
}

/// Minimal page shown when a dashboard request fails.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}
