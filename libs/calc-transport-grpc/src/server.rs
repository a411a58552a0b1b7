//! Plaintext TCP hosting for tonic services.
//!
//! The process never terminates TLS itself; the hosting platform's proxy
//! forwards cleartext HTTP/2 to the bound port.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::{service::Routes, transport::Server};

/// Where the gRPC server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenConfig {
    addr: SocketAddr,
}

impl ListenConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Listen on `0.0.0.0:<port>`.
    #[must_use]
    pub const fn all_interfaces(port: u16) -> Self {
        Self::new(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bind the TCP listener.
    ///
    /// # Errors
    /// Returns an error if the address is already in use or cannot be bound.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        TcpListener::bind(self.addr)
            .await
            .with_context(|| format!("failed to bind gRPC listener on {}", self.addr))
    }
}

impl From<SocketAddr> for ListenConfig {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr)
    }
}

/// Serve `routes` on an already bound listener until `cancel` fires.
///
/// Each connection and each stream is driven on its own tokio task by the
/// underlying hyper server.
///
/// # Errors
/// Returns an error if the listener address cannot be read or the server fails.
pub async fn serve_routes(
    listener: TcpListener,
    routes: Routes,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, transport = "tcp", "gRPC server listening");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_routes(routes)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
        })
        .await
        .context("gRPC server terminated with an error")?;

    tracing::info!(%bound_addr, "gRPC server stopped");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_interfaces_uses_unspecified_ipv4() {
        let cfg = ListenConfig::all_interfaces(8080);
        assert_eq!(cfg.addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let cfg = ListenConfig::new("127.0.0.1:0".parse().unwrap());
        let listener = cfg.bind().await.expect("ephemeral bind should succeed");
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let first = ListenConfig::new("127.0.0.1:0".parse().unwrap())
            .bind()
            .await
            .unwrap();
        let taken = ListenConfig::new(first.local_addr().unwrap());

        let err = taken.bind().await.expect_err("second bind must fail");
        assert!(err.to_string().contains("failed to bind"));
    }
}
