//! Domain layer for the signal responder

pub mod service;

pub use service::Service;
