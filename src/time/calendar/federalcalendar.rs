use chrono::NaiveDate;

use crate::time::calendar::federalholiday::{FederalHoliday, STANDARD_HOLIDAYS};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::recurringholiday::inaugurationday::InaugurationDay;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// United States federal calendar: Saturday and Sunday plus the legal public
/// holidays, optionally including Inauguration Day.
pub struct FederalCalendar {
    recurring_holidays: Vec<Box<dyn RecurringHoliday>>,
    inauguration_day: Option<InaugurationDay>
}

impl FederalCalendar {
    /// Calendar including Inauguration Day in its years.
    pub fn new() -> FederalCalendar {
        FederalCalendar::with_inauguration_day(true)
    }

    pub fn with_inauguration_day(include_inauguration_day: bool) -> FederalCalendar {
        FederalCalendar {
            recurring_holidays: STANDARD_HOLIDAYS.iter().map(FederalHoliday::rule).collect(),
            inauguration_day: include_inauguration_day.then(InaugurationDay::new)
        }
    }

    pub fn includes_inauguration_day(&self) -> bool {
        self.inauguration_day.is_some()
    }

    /// Standard holidays of `year` and of its neighbours that are observed
    /// inside `year`, plus Inauguration Day when applicable. A date shared by
    /// two holidays appears once.
    pub fn effective_holidays(&self, year: i32) -> HolidaySet {
        let mut holiday_set = HolidaySet::new();

        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.get_holiday(year));
        }

        if let Some(inauguration_day) = &self.inauguration_day {
            holiday_set.extend(inauguration_day.get_holiday(year));
        }

        holiday_set
    }

    pub fn is_effective_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(&d))
            || self.inauguration_day.as_ref().is_some_and(|r| r.is_holiday(&d))
    }
}

impl Default for FederalCalendar {
    fn default() -> Self {
        FederalCalendar::new()
    }
}

impl HolidayCalendar for FederalCalendar {
    fn holiday_set(&self, year: i32) -> HolidaySet {
        self.effective_holidays(year)
    }
}
