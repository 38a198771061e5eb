use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::{self, HolidaySet};
use crate::time::rangeofdates::RangeOfDates;

/// Longest range, in days, counted unless configured otherwise (about a
/// thousand years).
pub const DEFAULT_MAX_SPAN_DAYS: u64 = 366_000;

/// Counts business days in inclusive date ranges against a calendar.
///
/// Each call to [`count`](BusinessDayCounter::count) owns its own year cache,
/// so one counter can be shared between threads.
pub struct BusinessDayCounter<'a, C: HolidayCalendar + ?Sized> {
    calendar: &'a C,
    max_span_days: Option<u64>
}

impl<'a, C: HolidayCalendar + ?Sized> BusinessDayCounter<'a, C> {
    pub fn new(calendar: &'a C) -> BusinessDayCounter<'a, C> {
        BusinessDayCounter {
            calendar,
            max_span_days: Some(DEFAULT_MAX_SPAN_DAYS)
        }
    }

    /// `None` removes the bound.
    pub fn with_max_span_days(mut self, max_span_days: Option<u64>) -> BusinessDayCounter<'a, C> {
        self.max_span_days = max_span_days;
        self
    }

    pub fn max_span_days(&self) -> Option<u64> {
        self.max_span_days
    }

    /// Number of business days in `range`, both ends included. An inverted
    /// range counts zero.
    pub fn count(&self, range: &RangeOfDates) -> Result<u64, CalendarError> {
        if range.is_empty() {
            return Ok(0);
        }

        let days = range.len();
        if let Some(max) = self.max_span_days {
            if days > max {
                return Err(CalendarError::RangeTooLong { days, max });
            }
        }

        let mut year_cache = YearCache::new(self.calendar);
        let mut count = 0u64;
        for d in range.iter() {
            if holidayset::is_business_day(d, year_cache.holidays_for(d.year())) {
                count += 1;
            }
        }

        debug!(
            start = %range.start_date(),
            end = %range.end_date(),
            days,
            business_days = count,
            "counted business days"
        );
        Ok(count)
    }

    pub fn count_between(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<u64, CalendarError> {
        self.count(&RangeOfDates::new(start_date, end_date))
    }
}

/// Holiday set of the year currently being walked, rebuilt on year change.
struct YearCache<'a, C: HolidayCalendar + ?Sized> {
    calendar: &'a C,
    year: Option<i32>,
    holidays: HolidaySet
}

impl<'a, C: HolidayCalendar + ?Sized> YearCache<'a, C> {
    fn new(calendar: &'a C) -> YearCache<'a, C> {
        YearCache {
            calendar,
            year: None,
            holidays: HolidaySet::new()
        }
    }

    fn holidays_for(&mut self, year: i32) -> &HolidaySet {
        if self.year != Some(year) {
            self.holidays = self.calendar.holiday_set(year);
            self.year = Some(year);
            trace!(year, holidays = self.holidays.len(), "rebuilt holiday set");
        }
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::time::calendar::federalcalendar::FederalCalendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Weekends only, recording which years were asked for.
    struct RecordingCalendar {
        requested: Mutex<Vec<i32>>
    }

    impl HolidayCalendar for RecordingCalendar {
        fn holiday_set(&self, year: i32) -> HolidaySet {
            self.requested.lock().unwrap().push(year);
            HolidaySet::new()
        }
    }

    #[test]
    fn holiday_set_built_once_per_year() {
        let calendar = RecordingCalendar { requested: Mutex::new(Vec::new()) };
        let counter = BusinessDayCounter::new(&calendar);
        counter.count_between(date(2023, 12, 1), date(2025, 1, 31)).unwrap();
        assert_eq!(*calendar.requested.lock().unwrap(), vec![2023, 2024, 2025]);

        // A second pass starts from an empty cache.
        counter.count_between(date(2024, 3, 1), date(2024, 3, 2)).unwrap();
        assert_eq!(*calendar.requested.lock().unwrap(), vec![2023, 2024, 2025, 2024]);
    }

    #[test]
    fn weekends_only_week() {
        let calendar = RecordingCalendar { requested: Mutex::new(Vec::new()) };
        let counter = BusinessDayCounter::new(&calendar);
        // Monday to Sunday
        assert_eq!(counter.count_between(date(2024, 11, 4), date(2024, 11, 10)).unwrap(), 5);
    }

    #[test]
    fn inverted_range_counts_zero_without_touching_calendar() {
        let calendar = RecordingCalendar { requested: Mutex::new(Vec::new()) };
        let counter = BusinessDayCounter::new(&calendar).with_max_span_days(Some(1));
        assert_eq!(counter.count_between(date(2024, 11, 8), date(2024, 11, 4)).unwrap(), 0);
        assert!(calendar.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn span_limit() {
        let calendar = FederalCalendar::new();
        let counter = BusinessDayCounter::new(&calendar).with_max_span_days(Some(5));
        assert_eq!(counter.max_span_days(), Some(5));
        assert_eq!(counter.count_between(date(2024, 11, 4), date(2024, 11, 8)).unwrap(), 5);
        assert!(matches!(
            counter.count_between(date(2024, 11, 4), date(2024, 11, 9)),
            Err(CalendarError::RangeTooLong { days: 6, max: 5 })
        ));

        let unbounded = BusinessDayCounter::new(&calendar).with_max_span_days(None);
        assert!(unbounded.count_between(date(2000, 1, 1), date(2003, 12, 31)).is_ok());
    }

    #[test]
    fn observed_new_year_in_december_is_excluded() {
        let calendar = FederalCalendar::new();
        let counter = BusinessDayCounter::new(&calendar);
        // Friday 2027-12-31 is the observed New Year's Day of 2028
        assert_eq!(counter.count_between(date(2027, 12, 31), date(2027, 12, 31)).unwrap(), 0);
        assert_eq!(counter.count_between(date(2027, 12, 27), date(2028, 1, 4)).unwrap(), 6);
    }

    #[test]
    fn works_through_trait_object() {
        let calendar = FederalCalendar::new();
        let dyn_calendar: &dyn HolidayCalendar = &calendar;
        let counter = BusinessDayCounter::new(dyn_calendar);
        assert_eq!(counter.count_between(date(2024, 12, 23), date(2024, 12, 27)).unwrap(), 4);
        let range = RangeOfDates::new(date(2024, 12, 23), date(2024, 12, 27));
        assert_eq!(range.iter().filter(|d| dyn_calendar.is_business_day(*d)).count(), 4);
    }
}
