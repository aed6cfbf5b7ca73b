use super::request::PredictionRequest;
use chrono::Datelike;
use serde::Deserialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Raw field values as captured from a form, one string per field.
///
/// CSV columns use the camelCase form field names, hence the renames. Missing
/// columns default to the empty string, which fails the corresponding range
/// check like any other unparsable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawFormInput {
    #[serde(rename = "houseAge", default)]
    pub house_age: String,
    #[serde(rename = "distanceToMRT", default)]
    pub distance_to_mrt: String,
    #[serde(rename = "numberOfStores", default)]
    pub number_of_stores: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(rename = "transactionYear", default)]
    pub transaction_year: String,
    #[serde(rename = "transactionMonth", default)]
    pub transaction_month: String,
}

impl RawFormInput {
    /// A known-good listing near Taipei, handy for demos and smoke tests.
    pub fn sample() -> Self {
        Self {
            house_age: "5".into(),
            distance_to_mrt: "0.8".into(),
            number_of_stores: "7".into(),
            latitude: "25.0330".into(),
            longitude: "121.5654".into(),
            transaction_year: "2023".into(),
            transaction_month: "6".into(),
        }
    }
}

/// One message per failing field, in field order. Empty never escapes
/// [`validate`]: an error is only returned when at least one field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl fmt::Display for ValidationError {
    /// Joins the per-field messages with ". ", the exact text the Presenter
    /// displays.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join(". "))
    }
}

impl std::error::Error for ValidationError {}

/// Validates raw form input against the field range policy, resolving the
/// transaction-year upper bound from the current local date.
pub fn validate(input: &RawFormInput) -> Result<PredictionRequest, ValidationError> {
    validate_at(input, chrono::Local::now().year())
}

/// Pure validation against an explicit current year.
///
/// Each field is checked independently and every failing field contributes its
/// message, so the caller sees all problems in one pass. An unparsable value
/// fails the same check as an out-of-range one.
pub fn validate_at(
    input: &RawFormInput,
    current_year: i32,
) -> Result<PredictionRequest, ValidationError> {
    let mut messages = Vec::new();

    let house_age = parse_float(&input.house_age, 0.0..=100.0);
    if house_age.is_none() {
        messages.push("House age must be between 0 and 100 years".to_string());
    }

    let distance_to_mrt = parse_float(&input.distance_to_mrt, 0.0..=50.0);
    if distance_to_mrt.is_none() {
        messages.push("Distance to MRT must be between 0 and 50 km".to_string());
    }

    let number_of_stores = parse_int::<u8>(&input.number_of_stores, 0..=20);
    if number_of_stores.is_none() {
        messages.push("Number of stores must be between 0 and 20".to_string());
    }

    let latitude = parse_float(&input.latitude, -90.0..=90.0);
    if latitude.is_none() {
        messages.push("Latitude must be between -90 and 90".to_string());
    }

    let longitude = parse_float(&input.longitude, -180.0..=180.0);
    if longitude.is_none() {
        messages.push("Longitude must be between -180 and 180".to_string());
    }

    let transaction_year = parse_int::<i32>(&input.transaction_year, 2000..=current_year);
    if transaction_year.is_none() {
        messages.push(format!(
            "Transaction year must be between 2000 and {current_year}"
        ));
    }

    let transaction_month = parse_int::<u8>(&input.transaction_month, 1..=12);
    if transaction_month.is_none() {
        messages.push("Please select a valid transaction month".to_string());
    }

    match (
        house_age,
        distance_to_mrt,
        number_of_stores,
        latitude,
        longitude,
        transaction_year,
        transaction_month,
    ) {
        (
            Some(house_age),
            Some(distance_to_mrt),
            Some(number_of_stores),
            Some(latitude),
            Some(longitude),
            Some(transaction_year),
            Some(transaction_month),
        ) => Ok(PredictionRequest {
            house_age,
            distance_to_mrt,
            number_of_stores,
            latitude,
            longitude,
            transaction_year,
            transaction_month,
        }),
        _ => Err(ValidationError { messages }),
    }
}

fn parse_float(raw: &str, range: RangeInclusive<f64>) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && range.contains(v))
}

fn parse_int<T>(raw: &str, range: RangeInclusive<T>) -> Option<T>
where
    T: FromStr + PartialOrd,
{
    raw.trim().parse::<T>().ok().filter(|v| range.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2025;

    fn valid_input() -> RawFormInput {
        RawFormInput::sample()
    }

    #[test]
    fn test_sample_input_maps_to_renamed_request() {
        let request = validate_at(&valid_input(), YEAR).unwrap();
        assert_eq!(
            request,
            PredictionRequest {
                house_age: 5.0,
                distance_to_mrt: 0.8,
                number_of_stores: 7,
                latitude: 25.033,
                longitude: 121.5654,
                transaction_year: 2023,
                transaction_month: 6,
            }
        );
    }

    #[test]
    fn test_boundary_values_are_valid() {
        let mut input = valid_input();
        input.house_age = "0".into();
        input.distance_to_mrt = "50".into();
        input.number_of_stores = "20".into();
        input.latitude = "-90".into();
        input.longitude = "180".into();
        input.transaction_year = "2000".into();
        input.transaction_month = "12".into();
        assert!(validate_at(&input, YEAR).is_ok());

        let mut input = valid_input();
        input.house_age = "100".into();
        input.distance_to_mrt = "0".into();
        input.number_of_stores = "0".into();
        input.latitude = "90".into();
        input.longitude = "-180".into();
        input.transaction_year = YEAR.to_string();
        input.transaction_month = "1".into();
        assert!(validate_at(&input, YEAR).is_ok());
    }

    #[test]
    fn test_one_past_each_boundary_fails_with_field_message() {
        let cases: Vec<(fn(&mut RawFormInput, String), &str, &str)> = vec![
            (
                |i, v| i.house_age = v,
                "101",
                "House age must be between 0 and 100 years",
            ),
            (
                |i, v| i.house_age = v,
                "-1",
                "House age must be between 0 and 100 years",
            ),
            (
                |i, v| i.distance_to_mrt = v,
                "51",
                "Distance to MRT must be between 0 and 50 km",
            ),
            (
                |i, v| i.number_of_stores = v,
                "21",
                "Number of stores must be between 0 and 20",
            ),
            (
                |i, v| i.latitude = v,
                "91",
                "Latitude must be between -90 and 90",
            ),
            (
                |i, v| i.longitude = v,
                "-181",
                "Longitude must be between -180 and 180",
            ),
            (
                |i, v| i.transaction_year = v,
                "1999",
                "Transaction year must be between 2000 and 2025",
            ),
            (
                |i, v| i.transaction_year = v,
                "2026",
                "Transaction year must be between 2000 and 2025",
            ),
            (
                |i, v| i.transaction_month = v,
                "0",
                "Please select a valid transaction month",
            ),
            (
                |i, v| i.transaction_month = v,
                "13",
                "Please select a valid transaction month",
            ),
        ];

        for (set, value, expected) in cases {
            let mut input = valid_input();
            set(&mut input, value.to_string());
            let err = validate_at(&input, YEAR).unwrap_err();
            assert_eq!(err.messages(), [expected], "value {value:?}");
        }
    }

    #[test]
    fn test_non_numeric_fails_like_out_of_range() {
        let mut input = valid_input();
        input.house_age = "old".into();
        let err = validate_at(&input, YEAR).unwrap_err();
        assert_eq!(err.messages(), ["House age must be between 0 and 100 years"]);

        // NaN parses as a float but is never in range
        let mut input = valid_input();
        input.latitude = "NaN".into();
        let err = validate_at(&input, YEAR).unwrap_err();
        assert_eq!(err.messages(), ["Latitude must be between -90 and 90"]);
    }

    #[test]
    fn test_fractional_integer_field_is_rejected() {
        let mut input = valid_input();
        input.number_of_stores = "7.5".into();
        let err = validate_at(&input, YEAR).unwrap_err();
        assert_eq!(err.messages(), ["Number of stores must be between 0 and 20"]);
    }

    #[test]
    fn test_all_failing_fields_accumulate_in_order() {
        let input = RawFormInput::default();
        let err = validate_at(&input, YEAR).unwrap_err();

        assert_eq!(err.messages().len(), 7);
        assert_eq!(err.messages()[0], "House age must be between 0 and 100 years");
        assert_eq!(err.messages()[6], "Please select a valid transaction month");
        assert_eq!(
            err.to_string(),
            "House age must be between 0 and 100 years. \
             Distance to MRT must be between 0 and 50 km. \
             Number of stores must be between 0 and 20. \
             Latitude must be between -90 and 90. \
             Longitude must be between -180 and 180. \
             Transaction year must be between 2000 and 2025. \
             Please select a valid transaction month"
        );
    }

    #[test]
    fn test_current_year_is_resolved_per_call() {
        let mut input = valid_input();
        input.transaction_year = "2024".into();
        assert!(validate_at(&input, 2024).is_ok());
        assert!(validate_at(&input, 2023).is_err());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut input = valid_input();
        input.house_age = " 5 ".into();
        assert!(validate_at(&input, YEAR).is_ok());
    }
}
