use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::days_of_month;

/// The last occurrence of a weekday in a month, e.g. the last Monday of May.
#[derive(Clone, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        let end_of_month = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;

        // For Monday this is 6 when the month ends on a Sunday, else weekday - 1.
        let current_weekday = end_of_month.weekday().num_days_from_sunday();
        let target_weekday = self.weekday.num_days_from_sunday();
        let days_back = (current_weekday + 7 - target_weekday) % 7;

        end_of_month.checked_sub_days(Days::new(days_back as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn memorial_day() {
        let memorial_day = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        assert_eq!(memorial_day.observed_date(2025), Some(date(2025, 5, 26)));
        assert_eq!(memorial_day.observed_date(2026), Some(date(2026, 5, 25)));
        // 2027-05-31 is itself a Monday
        assert_eq!(memorial_day.observed_date(2027), Some(date(2027, 5, 31)));
    }

    #[test]
    fn month_ending_on_sunday() {
        // 2020-05-31 is a Sunday
        let memorial_day = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        assert_eq!(memorial_day.observed_date(2020), Some(date(2020, 5, 25)));
    }

    #[test]
    fn leap_february() {
        // 2024-02-29 is a Thursday
        let rule = LastWeekdayHoliday::new(2, Weekday::Thu).unwrap();
        assert_eq!(rule.observed_date(2024), Some(date(2024, 2, 29)));
        assert_eq!(rule.observed_date(2025), Some(date(2025, 2, 27)));
    }

    #[test]
    fn rejects_bad_month() {
        assert!(LastWeekdayHoliday::new(0, Weekday::Mon).is_none());
        assert!(LastWeekdayHoliday::new(13, Weekday::Mon).is_none());
    }
}
