//! Path-parameter date parsing

use crate::error::ApiError;
use chrono::NaiveDate;

/// Parse a `MMDDYYYY` path parameter, e.g. `01012016`.
///
/// The input must be exactly eight ASCII digits; chrono alone would
/// accept shorter month/day fields, so the shape is checked first.
pub fn parse_mmddyyyy(s: &str) -> Result<NaiveDate, ApiError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%m%d%Y").map_err(|_| ApiError::InvalidDate(s.to_string()))
}
