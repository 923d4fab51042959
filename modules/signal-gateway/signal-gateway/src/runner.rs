//! Gateway lifecycle: connect to the responder, bind, serve, shut down.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use signal_sdk::SignalGrpcClient;
use signal_transport_grpc::GrpcClientConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::api::rest::routes;
use crate::config::GatewayConfig;
use crate::domain::Service;

/// Open the responder connection, bind the HTTP listener and serve until `cancel` fires.
///
/// # Errors
/// Returns an error if the responder is unreachable, the listen address cannot be
/// bound, or the HTTP server fails.
pub async fn run(config: &GatewayConfig, cancel: CancellationToken) -> anyhow::Result<()> {
    let grpc_cfg = GrpcClientConfig::new("signal")
        .with_connect_timeout(config.connect_timeout())
        .with_rpc_timeout(config.request_timeout());

    let client = SignalGrpcClient::connect(&config.server_addr, &grpc_cfg)
        .await
        .with_context(|| format!("failed to connect to responder at '{}'", config.server_addr))?;

    let service = Arc::new(Service::with_timeout(
        Arc::new(client),
        config.request_timeout(),
    ));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on '{}'", config.listen_addr))?;

    let result = serve(listener, service, cancel).await;
    tracing::info!(server_addr = %config.server_addr, "closing responder connection");
    result
}

/// Serve the gateway routes on an already bound listener until `cancel` fires.
///
/// # Errors
/// Returns an error if the HTTP server fails.
pub async fn serve(
    listener: TcpListener,
    service: Arc<Service>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let router = routes::register_routes(Router::new(), service);

    tracing::info!(addr = %listener.local_addr()?, "HTTP server bound");

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
