pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::orchestrator::RequestOrchestrator;
pub use domain::form::{RawFormInput, ValidationError, validate, validate_at};
pub use domain::ports::{
    GatewayError, NoticeKind, PredictionGateway, PredictionGatewayBox, Presenter, PresenterHandle,
};
pub use domain::request::{PredictionOutcome, PredictionRequest};
pub use error::{PredictError, Result};
