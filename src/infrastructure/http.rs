use crate::domain::ports::{GatewayError, PredictionGateway};
use crate::domain::request::PredictionRequest;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default prediction endpoint for a locally running model server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict/";

/// Prediction gateway backed by an HTTP endpoint.
///
/// POSTs the serialized [`PredictionRequest`] as JSON and reads the price from
/// the response body. A non-success status maps to `GatewayError::Server`;
/// connection, timeout, and malformed-body failures map to
/// `GatewayError::Network`.
pub struct HttpPredictionGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionGateway {
    /// Creates a gateway for `endpoint` with an explicit request timeout, so
    /// an unresponsive server yields a deterministic network failure instead
    /// of hanging on platform defaults.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> std::result::Result<f64, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Server {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| GatewayError::Network {
            reason: format!("malformed response body: {e}"),
        })?;

        Ok(extract_price(&body))
    }
}

/// Reads the price from a response body: `predicted_price` wins over `price`,
/// and any other JSON shape is tolerated by defaulting to 0.
fn extract_price(body: &Value) -> f64 {
    body.get("predicted_price")
        .and_then(Value::as_f64)
        .or_else(|| body.get("price").and_then(Value::as_f64))
        .unwrap_or(0.0)
}
