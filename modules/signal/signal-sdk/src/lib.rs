//! Signal SDK
//!
//! This crate provides everything needed to consume or serve the signal service:
//! - API trait (`SignalClientV1`)
//! - Error types (`SignalError`) and their gRPC status mapping
//! - gRPC client (`SignalGrpcClient`)
//! - Proto stubs for server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use signal_sdk::{SignalClientV1, SignalGrpcClient};
//! use signal_transport_grpc::GrpcClientConfig;
//!
//! let cfg = GrpcClientConfig::new("signal");
//! let client = SignalGrpcClient::connect("localhost:10000", &cfg).await?;
//! let pong = client.ping("PING".to_owned()).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{EMPTY_ECHO_MESSAGE, INVALID_PING_MESSAGE, SignalClientV1, SignalError};

// === GRPC CLIENT ===
mod client;
pub use client::SignalGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `SignalService`
#[allow(clippy::pedantic)]
pub mod proto {
    tonic::include_proto!("signal.v1");
}

// Re-export proto types needed by server
pub use proto::signal_service_server::{SignalService, SignalServiceServer};
pub use proto::{EchoRequest, EchoResponse, PingRequest, PingResponse};

/// Fully-qualified gRPC service name
pub const SERVICE_NAME: &str = "signal.v1.SignalService";
