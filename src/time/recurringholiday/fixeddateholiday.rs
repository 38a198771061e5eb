use chrono::{
    Datelike,
    NaiveDate
};

use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::WeekendAdjustmentRule;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum WeekendAdjustmentShiftCheck {
    MayShiftToPreviousYear = 1,
    MayShiftToNextYear = -1,
    None
}

/// Holiday on the same month and day every year, moved off the weekend by
/// its adjustment rule.
#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rules: WeekendAdjustmentRule,
    shift_check: WeekendAdjustmentShiftCheck
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, weekend_adjustment_rules: WeekendAdjustmentRule) -> Option<FixedDateHoliday> {
        // Feb 29 is rejected too: it would vanish in three years out of four.
        NaiveDate::from_ymd_opt(2001, month, day)?;

        let max_shift = weekend_adjustment_rules.max_shift() as u32;
        let shift_check = if max_shift > 0 && month == 1 && day <= max_shift {
            WeekendAdjustmentShiftCheck::MayShiftToPreviousYear
        } else if max_shift > 0 && month == 12 && day > 31 - max_shift {
            WeekendAdjustmentShiftCheck::MayShiftToNextYear
        } else {
            WeekendAdjustmentShiftCheck::None
        };

        Some(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rules,
            shift_check
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekend_adjustment_rules(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment_rules
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|d| self.weekend_adjustment_rules.adjust(d))
    }

    fn get_holiday(&self, year: i32) -> Vec<NaiveDate> {
        let mut holidays = Vec::with_capacity(2);

        if let Some(d1) = self.observed_date(year) {
            if d1.year() == year {
                holidays.push(d1);
            }
        }

        // The neighbouring year's occurrence may be shifted into this one.
        if self.shift_check != WeekendAdjustmentShiftCheck::None {
            if let Some(d2) = self.observed_date(year + self.shift_check as i32) {
                if d2.year() == year {
                    holidays.push(d2);
                }
            }
        }

        holidays.sort();
        holidays
    }
}
