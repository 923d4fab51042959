#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;

pub use client::{GrpcClientConfig, connect_lazy_with_stack, connect_with_stack};

/// Turn a `host:port` pair into an `http://` URI.
///
/// Addresses that already carry a scheme are returned unchanged. The channel is
/// always plaintext, so a bare address gets `http://`.
#[must_use]
pub fn normalize_endpoint_uri(addr: &str) -> String {
    let addr = addr.trim();
    if addr.contains("://") {
        addr.to_owned()
    } else {
        format!("http://{addr}")
    }
}
