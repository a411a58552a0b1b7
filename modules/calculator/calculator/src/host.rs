//! Server host for the calculator service.
//!
//! Two states only: constructed (not serving) and serving. `run` binds the
//! listener and serves until the cancellation token fires.

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::{Routes, RoutesBuilder};

use calc_transport_grpc::{ListenConfig, serve_routes};
use calculator_sdk::{CalculatorServer, SERVICE_NAME};

use crate::api::grpc::CalculatorServiceImpl;

pub struct CalculatorHost {
    listen: ListenConfig,
}

impl CalculatorHost {
    #[must_use]
    pub const fn new(listen: ListenConfig) -> Self {
        Self { listen }
    }

    /// Routes with the calculator service registered.
    #[must_use]
    pub fn routes() -> Routes {
        let mut builder = RoutesBuilder::default();
        builder.add_service(CalculatorServer::new(CalculatorServiceImpl::new()));
        tracing::debug!(service = SERVICE_NAME, "registered gRPC service");
        builder.routes()
    }

    /// # Errors
    /// Returns an error if the configured address cannot be bound.
    pub async fn bind(&self) -> Result<TcpListener> {
        self.listen.bind().await
    }

    /// Serve on an already bound listener until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the server fails.
    pub async fn serve(listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        serve_routes(listener, Self::routes(), cancel).await
    }

    /// Bind and serve until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if binding or serving fails.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let listener = self.bind().await?;
        Self::serve(listener, cancel).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tonic::server::NamedService;

    #[test]
    fn test_service_name_matches_generated_server() {
        assert_eq!(
            <CalculatorServer<CalculatorServiceImpl> as NamedService>::NAME,
            SERVICE_NAME
        );
    }

    #[tokio::test]
    async fn test_run_stops_on_cancel() {
        let host = CalculatorHost::new(ListenConfig::new("127.0.0.1:0".parse().unwrap()));
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        let task = tokio::spawn(async move { host.run(cancel_clone).await });

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();

        tokio::time::timeout(Duration::from_secs(2), task)
            .await
            .expect("host should stop after cancel")
            .expect("task should join")
            .expect("host should exit cleanly");
    }
}
