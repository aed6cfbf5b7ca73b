use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PredictError>;
