use crate::domain::form::RawFormInput;
use crate::error::{PredictError, Result};
use std::io::Read;

/// Reads form submissions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<RawFormInput>`. Columns use the camelCase form field names
/// (houseAge, distanceToMRT, ...); whitespace trimming and flexible record
/// lengths are handled automatically, and values are kept as raw strings so
/// that validation owns all numeric interpretation.
pub struct FormReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FormReader<R> {
    /// Creates a new `FormReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes form rows.
    pub fn rows(self) -> impl Iterator<Item = Result<RawFormInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PredictError::from))
    }
}
