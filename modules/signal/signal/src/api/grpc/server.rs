//! gRPC Server implementation for the signal responder
//!
//! Handles gRPC requests and delegates to the domain Service.

use tonic::{Request, Response, Status};

use signal_sdk::{EchoRequest, EchoResponse, PingRequest, PingResponse, SignalService};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone, Default)]
pub struct SignalServiceImpl {
    service: Service,
}

impl SignalServiceImpl {
    /// Create a new `SignalService` implementation with the given Service.
    #[must_use]
    pub fn new(service: Service) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl SignalService for SignalServiceImpl {
    async fn ping(&self, request: Request<PingRequest>) -> Result<Response<PingResponse>, Status> {
        let req = request.into_inner();

        let message = self
            .service
            .ping(&req.message)
            .map_err(signal_sdk::SignalError::into_status)?;

        Ok(Response::new(PingResponse {
            message: message.to_owned(),
        }))
    }

    async fn echo(&self, request: Request<EchoRequest>) -> Result<Response<EchoResponse>, Status> {
        let req = request.into_inner();

        let message = self
            .service
            .echo(req.message)
            .map_err(signal_sdk::SignalError::into_status)?;

        Ok(Response::new(EchoResponse { message }))
    }
}
