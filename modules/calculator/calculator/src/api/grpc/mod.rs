//! gRPC API layer

mod error;
mod server;

pub use server::CalculatorServiceImpl;
