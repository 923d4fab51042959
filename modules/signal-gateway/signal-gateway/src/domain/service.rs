//! Domain service for the signal gateway
//!
//! Forwards path-derived messages to the responder, bounding every call by a
//! per-request deadline.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use signal_sdk::{SignalClientV1, SignalError};
use tracing::{debug, instrument};

/// Default bound on a single remote call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Domain service that translates gateway requests into remote calls.
///
/// Owns the shared client handle; handlers receive it through an axum
/// `Extension` instead of a process-wide global.
pub struct Service {
    client: Arc<dyn SignalClientV1>,
    request_timeout: Duration,
}

impl Service {
    /// Create a service with the default 10 second deadline.
    #[must_use]
    pub fn new(client: Arc<dyn SignalClientV1>) -> Self {
        Self::with_timeout(client, DEFAULT_REQUEST_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(client: Arc<dyn SignalClientV1>, request_timeout: Duration) -> Self {
        Self {
            client,
            request_timeout,
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Forward a ping.
    ///
    /// # Errors
    /// The responder's [`SignalError`], or [`SignalError::Transport`] when the deadline expires.
    #[instrument(skip(self, message), fields(len = message.len()))]
    pub async fn ping(&self, message: String) -> Result<String, SignalError> {
        debug!("Delegating ping to signal responder");
        self.with_deadline(self.client.ping(message)).await
    }

    /// Forward an echo.
    ///
    /// # Errors
    /// The responder's [`SignalError`], or [`SignalError::Transport`] when the deadline expires.
    #[instrument(skip(self, message), fields(len = message.len()))]
    pub async fn echo(&self, message: String) -> Result<String, SignalError> {
        debug!("Delegating echo to signal responder");
        self.with_deadline(self.client.echo(message)).await
    }

    /// Run `call` under the request deadline.
    ///
    /// On expiry the call future is dropped, which cancels the in-flight RPC.
    async fn with_deadline<F>(&self, call: F) -> Result<String, SignalError>
    where
        F: Future<Output = Result<String, SignalError>>,
    {
        if let Ok(result) = tokio::time::timeout(self.request_timeout, call).await {
            result
        } else {
            Err(SignalError::Transport(format!(
                "deadline exceeded after {}ms",
                self.request_timeout.as_millis()
            )))
        }
    }
}
