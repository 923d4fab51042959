//! Domain layer for the signal gateway

pub mod service;

pub use service::Service;
