//! Calculator SDK
//!
//! Everything needed to talk to, or implement, the calculator service:
//! - API trait (`CalculatorClient`) and error type (`CalculatorError`)
//! - the closed `Operation` enumeration and its wire conversions
//! - `CalculatorGrpcClient`, the tonic-backed client
//! - generated proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, CalculatorGrpcClient};
//!
//! let client = CalculatorGrpcClient::connect("http://127.0.0.1:8080").await?;
//! let sum = client.add(2.0, 3.0).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClient, CalculatorError, Operation, UnknownOperation};

// === GRPC CLIENT ===
mod client;
pub use client::CalculatorGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for the `calculator.v1.Calculator` service
#[allow(clippy::all, clippy::pedantic)]
pub mod proto {
    tonic::include_proto!("calculator.v1");
}

// Re-export proto types needed by server
pub use proto::calculator_server::{Calculator, CalculatorServer};
pub use proto::{BinaryOperation, CalculationResult};

/// Fully qualified gRPC service name
pub const SERVICE_NAME: &str = "calculator.v1.Calculator";
