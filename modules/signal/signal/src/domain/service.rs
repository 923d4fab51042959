//! Domain service for the signal responder
//!
//! Contains the validation rules behind `Ping` and `Echo`.

use signal_sdk::SignalError;
use tracing::debug;

/// The only ping message the responder accepts.
pub const PING: &str = "PING";

/// Reply to a valid ping.
pub const PONG: &str = "PONG";

/// Domain service that validates ping and echo requests.
///
/// Stateless; every call depends only on its input, so one instance can be
/// shared by all gRPC tasks without synchronization.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reply `PONG` to an exact `PING`.
    ///
    /// The comparison is byte-exact: no trimming, no case folding.
    ///
    /// # Errors
    /// [`SignalError::InvalidPing`] for any other message.
    pub fn ping(self, message: &str) -> Result<&'static str, SignalError> {
        if message == PING {
            return Ok(PONG);
        }
        debug!(len = message.len(), "rejecting ping");
        Err(SignalError::InvalidPing)
    }

    /// Return the message unchanged.
    ///
    /// # Errors
    /// [`SignalError::EmptyEcho`] if the message is empty.
    pub fn echo(self, message: String) -> Result<String, SignalError> {
        if message.is_empty() {
            debug!("rejecting empty echo");
            return Err(SignalError::EmptyEcho);
        }
        Ok(message)
    }
}
