use super::request::PredictionRequest;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Severity of a transient user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

/// The view-layer collaborator. The core never renders anything itself; every
/// user-visible effect goes through this trait.
pub trait Presenter: Send + Sync {
    /// Put the UI into its busy state for the duration of a request.
    fn enter_loading_state(&self);
    /// Clear the busy state. Called exactly once per issued request.
    fn exit_loading_state(&self);
    /// Render a validation failure message.
    fn show_error(&self, message: &str);
    /// Render a predicted price. `simulated` marks demo-fallback data so the
    /// view can annotate it as not a real prediction.
    fn show_price(&self, value: f64, simulated: bool);
    /// Transient toast-style message.
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Failure modes of a prediction gateway call.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("server responded with status {status}")]
    Server { status: u16 },
    #[error("request failed: {reason}")]
    Network { reason: String },
}

/// Outbound port to the remote prediction service.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Sends the request and returns the predicted price.
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> std::result::Result<f64, GatewayError>;
}

pub type PredictionGatewayBox = Box<dyn PredictionGateway>;
pub type PresenterHandle = Arc<dyn Presenter>;
