use std::collections::HashMap;

use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Array-based weekend adjustment rule, indexed by
/// `Weekday::num_days_from_monday()`. `None` leaves the date where it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the rule from a map of weekend days to their adjustment.
    ///
    /// When several consecutive days are marked, the shift walks past all of
    /// them so the adjusted date never lands on another marked day.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift_days = 0;
            let one_day = adj as i64;

            while adjustment_map.contains_key(&to_weekday) {
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
        }

        WeekendAdjustmentRule { rule }
    }

    /// Saturday moves back to Friday, Sunday forward to Monday
    /// (5 U.S.C. 6103(b)).
    pub fn federal_observance() -> WeekendAdjustmentRule {
        let adjustment_map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]);
        WeekendAdjustmentRule::new(&adjustment_map)
    }

    /// Only Sunday moves, forward to Monday (5 U.S.C. 6103(c)).
    pub fn sunday_to_monday() -> WeekendAdjustmentRule {
        let adjustment_map = HashMap::from([
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]);
        WeekendAdjustmentRule::new(&adjustment_map)
    }

    pub fn adjustment_map(&self) -> HashMap<Weekday, WeekendAdjustment> {
        let mut result: HashMap<Weekday, WeekendAdjustment> = HashMap::new();

        for (day_offset, shift) in self.rule.iter().enumerate() {
            if let (Some(shift), Ok(weekday)) = (shift, Weekday::try_from(day_offset as u8)) {
                let adjustment = match shift {
                    n if *n > 0 => WeekendAdjustment::NextWeekday,
                    n if *n < 0 => WeekendAdjustment::PreviousWeekday,
                    _ => WeekendAdjustment::Unadjusted,
                };
                result.insert(weekday, adjustment);
            }
        }

        result
    }

    /// Number of calendar days the largest shift may move a date.
    pub fn max_shift(&self) -> i64 {
        self.rule.iter().flatten().map(|s| s.abs()).max().unwrap_or(0)
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let idx = d.weekday().num_days_from_monday() as usize;

        match self.rule[idx] {
            Some(shift) => d + Duration::days(shift),
            None => d,
        }
    }
}
