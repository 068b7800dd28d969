//! HTTP error response mapping for JSON endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use gpiohub_domain::error::GpioHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GpioHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(GpioHubError);

impl From<GpioHubError> for ApiError {
    fn from(err: GpioHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GpioHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GpioHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
