use chrono::{Datelike, NaiveDate};

use crate::error::{check_year, CalendarError};

const DATE_LITERAL_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` literal into a calendar date.
///
/// The year must be written with exactly four digits and month and day with
/// two, so `2024-1-5` or `+2024-01-05` are rejected instead of being read
/// leniently. Impossible dates (`2023-02-29`) fail as well.
pub fn parse_date_literal(literal: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = literal.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(CalendarError::invalid_literal(literal, "expected YYYY-MM-DD"));
    }

    let d = NaiveDate::parse_from_str(trimmed, DATE_LITERAL_FORMAT)
        .map_err(|error| CalendarError::invalid_literal(literal, error.to_string()))?;
    check_year(d.year())?;
    Ok(d)
}
