use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use signal_sdk::SignalError;

use super::response::JsonBody;

/// A failed remote call, rendered as `500` with the error text as a JSON string.
#[derive(Debug)]
pub struct ApiError {
    operation: &'static str,
    source: SignalError,
}

impl ApiError {
    #[must_use]
    pub fn new(operation: &'static str, source: SignalError) -> Self {
        Self { operation, source }
    }
}

/// Map a remote call failure to the gateway's error response.
///
/// Validation errors are expected and only traced at `debug`; anything else
/// points at infrastructure trouble and is logged at `error`.
pub fn signal_error_to_response(operation: &str, err: &SignalError) -> Response {
    let text = err.to_string();
    if err.is_structured() {
        tracing::debug!(operation, error = %text, "remote call rejected");
    } else {
        tracing::error!(operation, error = %text, "remote call failed");
    }
    JsonBody(StatusCode::INTERNAL_SERVER_ERROR, text).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        signal_error_to_response(self.operation, &self.source)
    }
}
