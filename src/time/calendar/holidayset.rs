use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::time::utility::is_weekend;

/// Ordered set of distinct holiday dates.
///
/// Inserting a date that is already present is a no-op, so two holidays
/// observed on the same day count as a single exclusion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>
}

impl HolidaySet {
    pub fn new() -> HolidaySet {
        HolidaySet { dates: BTreeSet::new() }
    }

    /// Returns `false` when the date was already in the set.
    pub fn insert(&mut self, d: NaiveDate) -> bool {
        self.dates.insert(d)
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.dates.contains(&d)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<T: IntoIterator<Item = NaiveDate>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}

/// Absent entries, e.g. Inauguration Day outside its years, are skipped.
impl Extend<Option<NaiveDate>> for HolidaySet {
    fn extend<T: IntoIterator<Item = Option<NaiveDate>>>(&mut self, iter: T) {
        self.dates.extend(iter.into_iter().flatten());
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        HolidaySet { dates: iter.into_iter().collect() }
    }
}

impl FromIterator<Option<NaiveDate>> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = Option<NaiveDate>>>(iter: T) -> Self {
        HolidaySet { dates: iter.into_iter().flatten().collect() }
    }
}

/// Business-day predicate over a precomputed holiday set.
///
/// Weekends are rejected first; otherwise the date is a business day unless
/// the set contains it.
pub fn is_business_day(d: NaiveDate, holidays: &HolidaySet) -> bool {
    if is_weekend(d) {
        return false;
    }
    !holidays.contains(d)
}
