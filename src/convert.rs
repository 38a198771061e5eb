use crate::configuration::Configuration;
use crate::error::CalendarError;

/// Number of federal business days from `start_date` to `end_date`, both
/// `YYYY-MM-DD` literals and both included.
///
/// Weekends, the observed standard holidays and Inauguration Day are
/// excluded. An end date before the start date yields `0`; a malformed
/// literal is an error.
///
/// ```
/// assert_eq!(businessdays::count_business_days("2024-11-04", "2024-11-08").unwrap(), 5);
/// assert_eq!(businessdays::count_business_days("2024-11-08", "2024-11-04").unwrap(), 0);
/// assert!(businessdays::count_business_days("2024-11-4", "2024-11-08").is_err());
/// ```
pub fn count_business_days(start_date: &str, end_date: &str) -> Result<u64, CalendarError> {
    Configuration::default().count_business_days(start_date, end_date)
}
