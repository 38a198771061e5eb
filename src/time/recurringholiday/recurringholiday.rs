use chrono::{Datelike, NaiveDate};


/// A holiday that recurs every year according to a fixed rule.
pub trait RecurringHoliday: Send + Sync {

    /// Observed date of the holiday that belongs to `year`, after any weekend
    /// adjustment. The result may fall outside `year` (New Year's Day observed
    /// on December 31). `None` when the rule does not apply to `year` or the
    /// date is not representable.
    fn observed_date(&self, year: i32) -> Option<NaiveDate>;

    /// Observed dates that fall inside calendar year `year`, whichever year
    /// they belong to.
    fn get_holiday(&self, year: i32) -> Vec<NaiveDate> {
        self.observed_date(year)
            .filter(|d| d.year() == year)
            .into_iter()
            .collect()
    }

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).contains(d)
    }
}
