use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type of every gateway body.
pub const APPLICATION_JSON_UTF8: &str = "application/json; charset=UTF-8";

/// JSON body with an explicit status and `application/json; charset=UTF-8`.
#[derive(Debug)]
pub struct JsonBody<T>(pub StatusCode, pub T);

impl<T> JsonBody<T> {
    #[must_use]
    pub fn ok(value: T) -> Self {
        Self(StatusCode::OK, value)
    }
}

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.1) {
            Ok(body) => (
                self.0,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(APPLICATION_JSON_UTF8),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
