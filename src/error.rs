use std::io;

use thiserror::Error;

/// Lowest year accepted by the holiday calculators.
pub const MIN_YEAR: i32 = 1;

/// Highest year accepted by the holiday calculators (the last year a
/// `YYYY-MM-DD` literal can express).
pub const MAX_YEAR: i32 = 9999;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid date literal '{literal}': {reason}")]
    InvalidDateLiteral {
        literal: String,
        reason: String
    },

    #[error("year {year} is out of range (1..=9999)")]
    YearOutOfRange {
        year: i32
    },

    #[error("date range spans {days} days, more than the allowed {max}")]
    RangeTooLong {
        days: u64,
        max: u64
    },

    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error)
}

impl CalendarError {
    pub fn invalid_literal(literal: &str, reason: impl Into<String>) -> CalendarError {
        CalendarError::InvalidDateLiteral {
            literal: literal.to_owned(),
            reason: reason.into()
        }
    }
}

pub fn check_year(year: i32) -> Result<i32, CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::YearOutOfRange { year })
    }
}
