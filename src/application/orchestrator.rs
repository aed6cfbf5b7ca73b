use crate::domain::form::{RawFormInput, validate};
use crate::domain::ports::{GatewayError, NoticeKind, PredictionGatewayBox, PresenterHandle};
use crate::domain::request::PredictionOutcome;
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Simulated demo prices fall in this range.
const FALLBACK_PRICE_RANGE: std::ops::Range<i64> = 300_000..800_000;

const SUCCESS_MESSAGE: &str = "Price prediction generated successfully!";
const SERVER_ERROR_MESSAGE: &str =
    "Failed to get price prediction. Server returned an error. Please check your input data.";

/// Lifecycle of the one submission that may be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Validating,
    Pending,
}

/// The main entry point for submitting price predictions.
///
/// `RequestOrchestrator` owns the single-request lifecycle: it validates raw
/// form input, issues the gateway call, and drives exactly one of three
/// outcomes (success, server error with demo fallback, network failure with
/// demo fallback) through the injected `Presenter`. At most one submission is
/// in flight at a time; re-entrant calls are rejected.
pub struct RequestOrchestrator {
    gateway: PredictionGatewayBox,
    presenter: PresenterHandle,
    endpoint: String,
    fallback_delay: Duration,
    state: Mutex<SubmitState>,
    pending_fallback: Mutex<Option<JoinHandle<()>>>,
}

impl RequestOrchestrator {
    /// Creates a new `RequestOrchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The outbound port to the prediction service.
    /// * `presenter` - The view-layer collaborator.
    /// * `endpoint` - The endpoint address, used in the network-failure guidance message.
    /// * `fallback_delay` - How long after a failure the simulated demo price is shown.
    pub fn new(
        gateway: PredictionGatewayBox,
        presenter: PresenterHandle,
        endpoint: impl Into<String>,
        fallback_delay: Duration,
    ) -> Self {
        Self {
            gateway,
            presenter,
            endpoint: endpoint.into(),
            fallback_delay,
            state: Mutex::new(SubmitState::Idle),
            pending_fallback: Mutex::new(None),
        }
    }

    /// Submits raw form input for prediction.
    ///
    /// Returns `false` when another submission is still in flight; the
    /// presenter is not touched in that case. An accepted submission always
    /// ends with exactly one user-visible notification, and the loading state
    /// is cleared on every path that entered it. No error escapes this method.
    pub async fn submit(&self, input: RawFormInput) -> bool {
        {
            let mut state = self.state.lock().unwrap();
            if *state != SubmitState::Idle {
                tracing::warn!("submission rejected: a request is already in flight");
                return false;
            }
            *state = SubmitState::Validating;
        }

        // A fresh submission supersedes any demo price still scheduled from a
        // previous failure.
        self.cancel_pending_fallback();

        let request = match validate(&input) {
            Ok(request) => request,
            Err(errors) => {
                tracing::debug!(count = errors.messages().len(), "validation failed");
                self.presenter.show_error(&errors.to_string());
                self.set_state(SubmitState::Idle);
                return true;
            }
        };

        self.set_state(SubmitState::Pending);
        self.presenter.enter_loading_state();
        tracing::debug!(?request, endpoint = %self.endpoint, "issuing prediction request");

        let outcome = match self.gateway.predict(&request).await {
            Ok(price) => PredictionOutcome::Success(price),
            Err(GatewayError::Server { status }) => {
                tracing::warn!(status, "prediction endpoint returned an error");
                PredictionOutcome::ServerError(SERVER_ERROR_MESSAGE.to_string())
            }
            Err(GatewayError::Network { reason }) => {
                tracing::warn!(%reason, "prediction endpoint unreachable");
                PredictionOutcome::NetworkFailure(format!(
                    "Failed to get price prediction. \
                     Please ensure the prediction server is running on {}",
                    self.endpoint
                ))
            }
        };

        // Cleared exactly once, before any outcome reaches the presenter.
        self.presenter.exit_loading_state();
        self.set_state(SubmitState::Idle);

        match outcome {
            PredictionOutcome::Success(price) => {
                self.presenter.show_price(price, false);
                self.presenter.notify(SUCCESS_MESSAGE, NoticeKind::Success);
            }
            PredictionOutcome::ServerError(message)
            | PredictionOutcome::NetworkFailure(message) => {
                self.presenter.notify(&message, NoticeKind::Error);
                self.schedule_fallback();
            }
        }

        true
    }

    /// Awaits any outstanding demo-fallback task, so callers can make sure
    /// the simulated price has been shown before shutting down.
    pub async fn settle(&self) {
        let handle = self.pending_fallback.lock().unwrap().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    fn set_state(&self, next: SubmitState) {
        *self.state.lock().unwrap() = next;
    }

    /// Schedules a simulated demo price so the UI stays demonstrable when the
    /// backend is unavailable. Delivered as `show_price(.., simulated = true)`
    /// after the configured delay.
    fn schedule_fallback(&self) {
        let presenter = Arc::clone(&self.presenter);
        let delay = self.fallback_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let price = rand::thread_rng().gen_range(FALLBACK_PRICE_RANGE) as f64;
            presenter.show_price(price, true);
        });

        let mut pending = self.pending_fallback.lock().unwrap();
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    fn cancel_pending_fallback(&self) {
        if let Some(handle) = self.pending_fallback.lock().unwrap().take() {
            handle.abort();
            tracing::debug!("cancelled pending demo fallback");
        }
    }
}
