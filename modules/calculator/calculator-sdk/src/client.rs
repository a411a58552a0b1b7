//! gRPC client implementation of `CalculatorClient`

use anyhow::Result;
use async_trait::async_trait;
use calc_transport_grpc::{GrpcClientConfig, connect_with_retry};
use tonic::transport::Channel;

use crate::api::{CalculatorClient, CalculatorError, Operation};
use crate::proto::BinaryOperation;
use crate::proto::calculator_client::CalculatorClient as ProtoCalculatorClient;

/// gRPC client implementation of `CalculatorClient`
#[derive(Clone)]
pub struct CalculatorGrpcClient {
    inner: ProtoCalculatorClient<Channel>,
}

impl CalculatorGrpcClient {
    /// Connect using the default transport configuration with retries.
    ///
    /// # Errors
    /// Returns an error if no connection could be established.
    pub async fn connect(uri: impl Into<String>) -> Result<Self> {
        Self::connect_with_config(uri, &GrpcClientConfig::new("calculator")).await
    }

    /// Connect with an explicit transport configuration.
    ///
    /// # Errors
    /// Returns an error if no connection could be established.
    pub async fn connect_with_config(
        uri: impl Into<String>,
        cfg: &GrpcClientConfig,
    ) -> Result<Self> {
        let channel: Channel = connect_with_retry(uri, cfg).await?;
        Ok(Self::from_channel(channel))
    }

    #[must_use]
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: ProtoCalculatorClient::new(channel),
        }
    }
}

#[async_trait]
impl CalculatorClient for CalculatorGrpcClient {
    async fn calculate(
        &self,
        first_operand: f32,
        second_operand: f32,
        operation: Operation,
    ) -> Result<f32, CalculatorError> {
        let mut client = self.inner.clone();

        let request = tonic::Request::new(BinaryOperation {
            first_operand,
            second_operand,
            operation: operation.to_wire(),
        });

        let response = client.calculate(request).await?;
        let result = response.into_inner().result;

        tracing::debug!(first_operand, second_operand, %operation, result, "calculation completed");
        Ok(result)
    }
}
