// Utility functions
use crate::model::ValidationError;
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` departure date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date_str.to_string()))
}
