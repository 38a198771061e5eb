use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CalendarError;
use crate::time::calendar::businessdaycounter::{BusinessDayCounter, DEFAULT_MAX_SPAN_DAYS};
use crate::time::calendar::federalcalendar::FederalCalendar;
use crate::time::dateliteral::parse_date_literal;

/// Settings read from a JSON file, e.g.
///
/// ```json
/// { "include_inauguration_day": false, "max_span_days": 36600 }
/// ```
///
/// Missing fields keep their defaults; `"max_span_days": null` removes the
/// range bound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    include_inauguration_day: bool,
    max_span_days: Option<u64>
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            include_inauguration_day: true,
            max_span_days: Some(DEFAULT_MAX_SPAN_DAYS)
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, CalendarError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        info!(
            path = %file_path.display(),
            include_inauguration_day = configuration.include_inauguration_day,
            max_span_days = ?configuration.max_span_days,
            "loaded configuration"
        );
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, CalendarError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn include_inauguration_day(&self) -> bool {
        self.include_inauguration_day
    }

    pub fn max_span_days(&self) -> Option<u64> {
        self.max_span_days
    }

    pub fn calendar(&self) -> FederalCalendar {
        FederalCalendar::with_inauguration_day(self.include_inauguration_day)
    }

    /// Parses both literals and counts business days between them, inclusive.
    pub fn count_business_days(&self, start_date: &str, end_date: &str) -> Result<u64, CalendarError> {
        let start_date = parse_date_literal(start_date)?;
        let end_date = parse_date_literal(end_date)?;
        let calendar = self.calendar();
        BusinessDayCounter::new(&calendar)
            .with_max_span_days(self.max_span_days)
            .count_between(start_date, end_date)
    }
}
