//! Trip parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TripCalError, TripCalResult};

/// Everything a trip needs before an itinerary can be generated.
///
/// Sources receive this struct as JSON, so the field names are part of
/// the source command contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripParams {
    /// Destination city or region, e.g. "Paris, France"
    pub destination: String,
    /// Trip length in days
    pub num_days: u32,
    /// Total budget in whole US dollars
    pub budget_usd: u32,
    /// Free-form travel preferences, e.g. "museums, good food"
    pub preferences: String,
    /// First day of the trip
    pub start_date: NaiveDate,
}

/// Parse a user-supplied trip start date.
///
/// The converter takes a `NaiveDate`, so an invalid date can only enter
/// the system here, at the string boundary.
pub fn parse_start_date(s: &str) -> TripCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TripCalError::InvalidStartDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_date_accepts_iso_dates() {
        let date = parse_start_date("2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_start_date_rejects_garbage() {
        assert!(parse_start_date("June 1st").is_err());
        assert!(parse_start_date("2024-13-01").is_err());
        assert!(parse_start_date("").is_err());
    }
}
