//! REST DTOs for the signal gateway
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reply to an accepted ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    /// Always `PONG`
    pub message: String,
}

/// Reply to an accepted echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EchoResponse {
    /// The request message, unchanged
    pub message: String,
}
