//! gRPC client implementation of `SignalClientV1`

use anyhow::Result;
use async_trait::async_trait;
use signal_transport_grpc::{
    GrpcClientConfig, connect_lazy_with_stack, connect_with_stack, normalize_endpoint_uri,
};
use tonic::transport::Channel;
use tracing::debug;

use crate::api::{SignalClientV1, SignalError};
use crate::proto::signal_service_client::SignalServiceClient;
use crate::proto::{EchoRequest, PingRequest};

/// gRPC client for the signal responder.
///
/// Holds one channel; each call clones the generated client, which shares the
/// underlying HTTP/2 connection.
#[derive(Clone)]
pub struct SignalGrpcClient {
    inner: SignalServiceClient<Channel>,
}

impl SignalGrpcClient {
    /// Connect to the responder at `addr` (`host:port` or a full URI).
    ///
    /// # Errors
    /// Returns an error if the responder cannot be reached within the connect timeout.
    pub async fn connect(addr: &str, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_with_stack(normalize_endpoint_uri(addr), cfg).await?;
        Ok(Self::from_channel(channel))
    }

    /// Build a client that dials on the first call.
    ///
    /// # Errors
    /// Returns an error if `addr` is not a valid URI.
    pub fn connect_lazy(addr: &str, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_lazy_with_stack(normalize_endpoint_uri(addr), cfg)?;
        Ok(Self::from_channel(channel))
    }

    /// Wrap an already established channel.
    #[must_use]
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: SignalServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl SignalClientV1 for SignalGrpcClient {
    async fn ping(&self, message: String) -> Result<String, SignalError> {
        let mut client = self.inner.clone();
        let response = client
            .ping(PingRequest { message })
            .await
            .map_err(|status| {
                debug!(code = %status.code(), message = status.message(), "ping call failed");
                SignalError::from(status)
            })?;
        Ok(response.into_inner().message)
    }

    async fn echo(&self, message: String) -> Result<String, SignalError> {
        let mut client = self.inner.clone();
        let response = client
            .echo(EchoRequest { message })
            .await
            .map_err(|status| {
                debug!(code = %status.code(), message = status.message(), "echo call failed");
                SignalError::from(status)
            })?;
        Ok(response.into_inner().message)
    }
}
