//! Route registration for the signal gateway

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::domain::Service;

use super::{handlers, openapi};

/// Register all REST routes for the signal gateway.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // GET /ping/{message} - forward a handshake
        .route("/ping/", get(handlers::handle_ping_empty))
        .route("/ping/{*message}", get(handlers::handle_ping))
        // GET /echo/{message} - forward an echo
        .route("/echo/", get(handlers::handle_echo_empty))
        .route("/echo/{*message}", get(handlers::handle_echo))
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
