use axum::Json;
use utoipa::OpenApi;

use super::dto::{EchoResponse, PingResponse};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Signal Gateway", description = "REST front for the signal responder"),
    paths(handlers::handle_ping, handlers::handle_echo),
    components(schemas(PingResponse, EchoResponse)),
    tags((name = "signal", description = "Ping and echo"))
)]
pub struct ApiDoc;

/// Handler for GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
