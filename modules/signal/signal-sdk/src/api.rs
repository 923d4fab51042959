//! Signal API trait and types
//!
//! Contract trait and error taxonomy for the signal service, plus the mapping
//! between [`SignalError`] and `tonic::Status` used on both sides of the wire.

use async_trait::async_trait;
use tonic::{Code, Status};

/// Message returned by the responder when a ping carries anything but `PING`.
pub const INVALID_PING_MESSAGE: &str = "invalid ping message";

/// Message returned by the responder when an echo carries an empty message.
pub const EMPTY_ECHO_MESSAGE: &str = "message can't be empty";

/// Signal API trait
///
/// Both calls are stateless and independent; implementations must be safe to
/// share across tasks.
#[async_trait]
pub trait SignalClientV1: Send + Sync {
    /// Send a handshake. Succeeds with `"PONG"` only for the exact message `"PING"`.
    async fn ping(&self, message: String) -> Result<String, SignalError>;

    /// Echo a non-empty message back unchanged.
    async fn echo(&self, message: String) -> Result<String, SignalError>;
}

/// Error type for Signal operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Ping message was not exactly `PING`.
    #[error("invalid ping message")]
    InvalidPing,

    /// Echo message was empty.
    #[error("message can't be empty")]
    EmptyEcho,

    /// Any other validation error reported by the responder.
    #[error("{0}")]
    Rejected(String),

    /// Connection, timeout, or decoding failure.
    #[error("{0}")]
    Transport(String),
}

impl SignalError {
    /// `true` for errors produced by the responder's validation, `false` for transport failures.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Transport(_))
    }

    /// Encode as a gRPC status (responder side).
    #[must_use]
    pub fn into_status(self) -> Status {
        match self {
            Self::InvalidPing | Self::EmptyEcho => Status::invalid_argument(self.to_string()),
            Self::Rejected(msg) => Status::invalid_argument(msg),
            Self::Transport(msg) => Status::unavailable(msg),
        }
    }

    /// Decode a gRPC status (client side).
    ///
    /// Only `INVALID_ARGUMENT` counts as a structured remote error; every other
    /// code is produced by the transport (refused connection, deadline, codec).
    #[must_use]
    pub fn from_status(status: &Status) -> Self {
        if status.code() != Code::InvalidArgument {
            return Self::Transport(transport_text(status));
        }
        match status.message() {
            INVALID_PING_MESSAGE => Self::InvalidPing,
            EMPTY_ECHO_MESSAGE => Self::EmptyEcho,
            other => Self::Rejected(other.to_owned()),
        }
    }
}

impl From<Status> for SignalError {
    fn from(status: Status) -> Self {
        Self::from_status(&status)
    }
}

fn transport_text(status: &Status) -> String {
    if status.message().is_empty() {
        status.code().description().to_owned()
    } else {
        status.message().to_owned()
    }
}
