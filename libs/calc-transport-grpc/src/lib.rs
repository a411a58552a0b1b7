#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
//! gRPC transport helpers shared by the calculator SDK and the server host.
//!
//! - [`client`]: endpoint construction with timeouts and keepalive, plus
//!   connection retries with linear backoff.
//! - [`server`]: plaintext TCP listener binding and tonic serving with
//!   token-driven shutdown.

pub mod client;
pub mod server;

pub use client::{GrpcClientConfig, connect_with_retry, connect_with_stack};
pub use server::{ListenConfig, serve_routes};
