use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{check_year, CalendarError};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::inaugurationday::InaugurationDay;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;

/// Legal public holidays of 5 U.S.C. 6103.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize)]
pub enum FederalHoliday {
    NewYearsDay,
    MartinLutherKingDay,
    WashingtonsBirthday,
    MemorialDay,
    Juneteenth,
    IndependenceDay,
    LaborDay,
    ColumbusDay,
    VeteransDay,
    ThanksgivingDay,
    ChristmasDay,
    InaugurationDay
}

/// The eleven standing holidays in calendar order.
pub const STANDARD_HOLIDAYS: [FederalHoliday; 11] = [
    FederalHoliday::NewYearsDay,
    FederalHoliday::MartinLutherKingDay,
    FederalHoliday::WashingtonsBirthday,
    FederalHoliday::MemorialDay,
    FederalHoliday::Juneteenth,
    FederalHoliday::IndependenceDay,
    FederalHoliday::LaborDay,
    FederalHoliday::ColumbusDay,
    FederalHoliday::VeteransDay,
    FederalHoliday::ThanksgivingDay,
    FederalHoliday::ChristmasDay
];

fn fixed_date(month: u32, day: u32) -> Box<dyn RecurringHoliday> {
    Box::new(
        FixedDateHoliday::new(month, day, WeekendAdjustmentRule::federal_observance())
            .expect("federal fixed-date holidays fall on valid days")
    )
}

fn nth_weekday(month: u32, n: u8, weekday: Weekday) -> Box<dyn RecurringHoliday> {
    Box::new(
        NthWeekdayHoliday::new(month, n, weekday)
            .expect("federal nth-weekday holidays use n in 1..=4")
    )
}

fn last_weekday(month: u32, weekday: Weekday) -> Box<dyn RecurringHoliday> {
    Box::new(
        LastWeekdayHoliday::new(month, weekday)
            .expect("federal last-weekday holidays use a valid month")
    )
}

impl FederalHoliday {
    pub fn name(&self) -> &'static str {
        match self {
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MartinLutherKingDay => "Birthday of Martin Luther King, Jr.",
            FederalHoliday::WashingtonsBirthday => "Washington's Birthday",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::Juneteenth => "Juneteenth National Independence Day",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::ThanksgivingDay => "Thanksgiving Day",
            FederalHoliday::ChristmasDay => "Christmas Day",
            FederalHoliday::InaugurationDay => "Inauguration Day"
        }
    }

    /// The recurring rule that places this holiday in a given year.
    pub fn rule(&self) -> Box<dyn RecurringHoliday> {
        match self {
            FederalHoliday::NewYearsDay => fixed_date(1, 1),
            FederalHoliday::MartinLutherKingDay => nth_weekday(1, 3, Weekday::Mon),
            FederalHoliday::WashingtonsBirthday => nth_weekday(2, 3, Weekday::Mon),
            FederalHoliday::MemorialDay => last_weekday(5, Weekday::Mon),
            FederalHoliday::Juneteenth => fixed_date(6, 19),
            FederalHoliday::IndependenceDay => fixed_date(7, 4),
            FederalHoliday::LaborDay => nth_weekday(9, 1, Weekday::Mon),
            FederalHoliday::ColumbusDay => nth_weekday(10, 2, Weekday::Mon),
            FederalHoliday::VeteransDay => fixed_date(11, 11),
            FederalHoliday::ThanksgivingDay => nth_weekday(11, 4, Weekday::Thu),
            FederalHoliday::ChristmasDay => fixed_date(12, 25),
            FederalHoliday::InaugurationDay => Box::new(InaugurationDay::new())
        }
    }

    /// Observed date belonging to `year`. Only Inauguration Day can be
    /// absent.
    pub fn observed_date(&self, year: i32) -> Result<Option<NaiveDate>, CalendarError> {
        let year = check_year(year)?;
        Ok(self.rule().observed_date(year))
    }

    fn standing_date(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        self.observed_date(year)?
            .ok_or(CalendarError::YearOutOfRange { year })
    }
}

impl fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A holiday tagged with its observed date.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub struct Holiday {
    kind: FederalHoliday,
    date: NaiveDate
}

impl Holiday {
    pub fn new(kind: FederalHoliday, date: NaiveDate) -> Holiday {
        Holiday { kind, date }
    }

    pub fn kind(&self) -> FederalHoliday {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The eleven standing holidays of `year` in calendar order. A Saturday
/// New Year's Day is reported on December 31 of the prior year.
pub fn holidays_for_year(year: i32) -> Result<Vec<Holiday>, CalendarError> {
    STANDARD_HOLIDAYS.iter()
        .map(|kind| Ok(Holiday::new(*kind, kind.standing_date(year)?)))
        .collect()
}

pub fn inauguration_day_for_year(year: i32) -> Result<Option<NaiveDate>, CalendarError> {
    FederalHoliday::InaugurationDay.observed_date(year)
}

pub fn new_years_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::NewYearsDay.standing_date(year)
}

pub fn mlk_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::MartinLutherKingDay.standing_date(year)
}

pub fn washington_birthday(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::WashingtonsBirthday.standing_date(year)
}

pub fn memorial_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::MemorialDay.standing_date(year)
}

pub fn juneteenth(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::Juneteenth.standing_date(year)
}

pub fn independence_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::IndependenceDay.standing_date(year)
}

pub fn labor_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::LaborDay.standing_date(year)
}

pub fn columbus_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::ColumbusDay.standing_date(year)
}

pub fn veterans_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::VeteransDay.standing_date(year)
}

pub fn thanksgiving_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::ThanksgivingDay.standing_date(year)
}

pub fn christmas_day(year: i32) -> Result<NaiveDate, CalendarError> {
    FederalHoliday::ChristmasDay.standing_date(year)
}
