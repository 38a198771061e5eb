use chrono::NaiveDate;

use super::fixeddateholiday::FixedDateHoliday;
use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::WeekendAdjustmentRule;

const FIRST_INAUGURATION_YEAR: i32 = 1965;
const TERM_YEARS: i32 = 4;

/// January 20 of every fourth year counted from 1965, observed on
/// January 21 when it falls on a Sunday. There is no Saturday shift.
///
/// Only a legal public holiday for federal employees in the District of
/// Columbia and the surrounding counties and cities (5 U.S.C. 6103(c)).
#[derive(Clone, Debug)]
pub struct InaugurationDay {
    date_rule: FixedDateHoliday
}

impl InaugurationDay {
    pub fn new() -> InaugurationDay {
        InaugurationDay {
            date_rule: FixedDateHoliday::new(1, 20, WeekendAdjustmentRule::sunday_to_monday())
                .expect("January 20 is a valid month and day")
        }
    }

    pub fn is_inauguration_year(year: i32) -> bool {
        (year - FIRST_INAUGURATION_YEAR).rem_euclid(TERM_YEARS) == 0
    }
}

impl Default for InaugurationDay {
    fn default() -> Self {
        InaugurationDay::new()
    }
}

impl RecurringHoliday for InaugurationDay {
    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        if InaugurationDay::is_inauguration_year(year) {
            self.date_rule.observed_date(year)
        } else {
            None
        }
    }
}
