use serde::Serialize;

/// A fully validated prediction request.
///
/// Field names double as the wire names: serializing this struct produces the
/// exact JSON body the prediction endpoint expects. A `PredictionRequest` can
/// only be obtained through [`crate::domain::form::validate`], so holding one
/// means every field passed its range check. It is immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub house_age: f64,
    pub distance_to_mrt: f64,
    pub number_of_stores: u8,
    pub latitude: f64,
    pub longitude: f64,
    pub transaction_year: i32,
    pub transaction_month: u8,
}

/// The result of one submission attempt, consumed immediately by the Presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// The endpoint returned a price.
    Success(f64),
    /// The endpoint was reachable but responded with a failure status.
    ServerError(String),
    /// The endpoint could not be reached, or the response body was malformed.
    NetworkFailure(String),
}
