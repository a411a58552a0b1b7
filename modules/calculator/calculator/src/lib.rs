//! Calculator Module
//!
//! A unary gRPC service that adds or subtracts two floats.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic dispatch
//! - `api/grpc/server.rs` - gRPC server implementation
//! - `host.rs` - Listener binding and serving lifecycle
//!
//! External consumers should use the `calculator-sdk` crate, which provides
//! the gRPC client and the wire types.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === HOST ===
mod host;
pub use host::CalculatorHost;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
