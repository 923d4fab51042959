#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Signal Responder
//!
//! gRPC service exposing two stateless procedures:
//! - `Ping`: replies `PONG` to an exact `PING`
//! - `Echo`: returns any non-empty message unchanged
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Validation rules
//! - `api/grpc/server.rs` - gRPC server implementation
//! - `runner.rs` - Listener binding and graceful shutdown
//!
//! Consumers should use the `signal-sdk` crate, which provides the gRPC client
//! and the `SignalClientV1` trait.

pub mod config;
pub mod runner;

pub use config::ResponderConfig;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
