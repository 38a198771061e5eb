use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

/// The `n`-th occurrence of a weekday in a month, e.g. the third Monday of
/// January.
#[derive(Clone, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    /// `n` is limited to 1..=4 so every month of every year has the date.
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=4).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let first_weekday = first_of_month.weekday().num_days_from_sunday();
        let target = self.weekday.num_days_from_sunday();

        let offset = (target + 7 - first_weekday) % 7 + 7 * (self.n as u32 - 1);
        first_of_month.checked_add_days(Days::new(offset as u64))
    }
}
