use async_trait::async_trait;
use estate_predict::domain::ports::{GatewayError, NoticeKind, PredictionGateway, Presenter};
use estate_predict::domain::request::PredictionRequest;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    EnterLoading,
    ExitLoading,
    Error(String),
    Price(f64, bool),
    Notice(String, NoticeKind),
}

/// Presenter that records every call for later assertions.
#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<Event>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn enter_loading_state(&self) {
        self.push(Event::EnterLoading);
    }

    fn exit_loading_state(&self) {
        self.push(Event::ExitLoading);
    }

    fn show_error(&self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn show_price(&self, value: f64, simulated: bool) {
        self.push(Event::Price(value, simulated));
    }

    fn notify(&self, message: &str, kind: NoticeKind) {
        self.push(Event::Notice(message.to_string(), kind));
    }
}

/// Gateway that echoes back a fixed price and records the requests it saw.
#[derive(Default)]
pub struct FixedPriceGateway {
    price: f64,
    requests: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl FixedPriceGateway {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded requests, usable after the gateway has
    /// been boxed and handed to the orchestrator.
    pub fn requests(&self) -> Arc<Mutex<Vec<PredictionRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl PredictionGateway for FixedPriceGateway {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, GatewayError> {
        self.requests.lock().unwrap().push(*request);
        Ok(self.price)
    }
}
