use chrono::{Datelike, Days, NaiveDate};

use crate::time::calendar::holidayset::{self, HolidaySet};

const ONE_DAY: Days = Days::new(1);

pub trait HolidayCalendar: Send + Sync {
    /// Effective holiday dates inside calendar year `year`, weekends excluded.
    fn holiday_set(&self, year: i32) -> HolidaySet;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        !self.is_business_day(d)
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        holidayset::is_business_day(d, &self.holiday_set(d.year()))
    }

    /// Moves `n` business days away from `horizon`, backwards when `n` is
    /// negative. `horizon` itself is never counted.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d);
            m -= self.is_business_day(d) as u32;
        }
        d
    }

    fn next_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, -1)
    }
}
