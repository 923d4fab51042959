//! REST handlers for the signal gateway
//!
//! The path suffix after `/ping/` or `/echo/` is the message, verbatim. The
//! empty suffix has its own route because a catch-all never matches nothing.
//! A suffix that does not decode to UTF-8 fails like any other unstructured
//! error: `500` with the rejection text.

use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use signal_sdk::SignalError;

use crate::domain::Service;

use super::dto::{EchoResponse, PingResponse};
use super::error::ApiError;
use super::response::JsonBody;

/// Handler for GET /ping/{message}
#[utoipa::path(
    get,
    path = "/ping/{message}",
    tag = "signal",
    params(("message" = String, Path, description = "Handshake message; only `PING` is accepted")),
    responses(
        (status = 200, description = "Handshake accepted", body = PingResponse),
        (status = 500, description = "Invalid ping or transport failure", body = String),
    )
)]
pub async fn handle_ping(
    Extension(service): Extension<Arc<Service>>,
    message: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<PingResponse>, ApiError> {
    let message = path_message("ping", message)?;
    ping(&service, message).await
}

/// Handler for GET /ping/
pub async fn handle_ping_empty(
    Extension(service): Extension<Arc<Service>>,
) -> Result<JsonBody<PingResponse>, ApiError> {
    ping(&service, String::new()).await
}

/// Handler for GET /echo/{message}
#[utoipa::path(
    get,
    path = "/echo/{message}",
    tag = "signal",
    params(("message" = String, Path, description = "Message to echo; must not be empty")),
    responses(
        (status = 200, description = "Message echoed", body = EchoResponse),
        (status = 500, description = "Empty message or transport failure", body = String),
    )
)]
pub async fn handle_echo(
    Extension(service): Extension<Arc<Service>>,
    message: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<EchoResponse>, ApiError> {
    let message = path_message("echo", message)?;
    echo(&service, message).await
}

/// Handler for GET /echo/
pub async fn handle_echo_empty(
    Extension(service): Extension<Arc<Service>>,
) -> Result<JsonBody<EchoResponse>, ApiError> {
    echo(&service, String::new()).await
}

fn path_message(
    operation: &'static str,
    message: Result<Path<String>, PathRejection>,
) -> Result<String, ApiError> {
    message.map(|Path(message)| message).map_err(|rejection| {
        ApiError::new(operation, SignalError::Transport(rejection.body_text()))
    })
}

async fn ping(service: &Service, message: String) -> Result<JsonBody<PingResponse>, ApiError> {
    let message = service
        .ping(message)
        .await
        .map_err(|e| ApiError::new("ping", e))?;
    Ok(JsonBody::ok(PingResponse { message }))
}

async fn echo(service: &Service, message: String) -> Result<JsonBody<EchoResponse>, ApiError> {
    let message = service
        .echo(message)
        .await
        .map_err(|e| ApiError::new("echo", e))?;
    Ok(JsonBody::ok(EchoResponse { message }))
}
