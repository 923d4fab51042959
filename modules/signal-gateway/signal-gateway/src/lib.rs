#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Signal Gateway
//!
//! Exposes a REST API that translates `GET /ping/{message}` and
//! `GET /echo/{message}` into calls on the signal responder.
//!
//! ## Architecture
//!
//! - `Service` holds the responder client and the per-request deadline
//! - REST handlers call Service through an axum `Extension`
//! - Failures render as `500` with the error text as a JSON string

pub mod config;
pub mod domain;
pub mod runner;

pub use config::GatewayConfig;
pub use domain::Service;

#[doc(hidden)]
pub mod api;
