//! Responder lifecycle: bind, serve, shut down.

use anyhow::Context;
use signal_sdk::{SERVICE_NAME, SignalServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use crate::api::grpc::SignalServiceImpl;
use crate::config::ResponderConfig;
use crate::domain::Service;

/// Bind the configured address and serve until `cancel` fires.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: &ResponderConfig, cancel: CancellationToken) -> anyhow::Result<()> {
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind gRPC listener on '{addr}'"))?;
    serve(listener, cancel).await
}

/// Serve the signal service on an already bound listener until `cancel` fires.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, cancel: CancellationToken) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, service = SERVICE_NAME, "signal responder listening");

    let svc = SignalServiceServer::new(SignalServiceImpl::new(Service::new()));
    let incoming = TcpListenerStream::new(listener);

    Server::builder()
        .add_service(svc)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
            tracing::info!("signal responder shutting down gracefully");
        })
        .await?;
    Ok(())
}
