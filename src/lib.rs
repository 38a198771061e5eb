pub mod configuration;

pub mod convert;

pub mod error;

pub mod time {
    pub mod utility;
    pub mod dateliteral;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod inaugurationday;
    }

    pub mod calendar {
        pub mod holidayset;
        pub mod holidaycalendar;
        pub mod federalholiday;
        pub mod federalcalendar;
        pub mod businessdaycounter;
    }
}

pub use configuration::Configuration;
pub use convert::count_business_days;
pub use error::CalendarError;
pub use time::calendar::businessdaycounter::{BusinessDayCounter, DEFAULT_MAX_SPAN_DAYS};
pub use time::calendar::federalcalendar::FederalCalendar;
pub use time::calendar::federalholiday::{
    christmas_day,
    columbus_day,
    holidays_for_year,
    inauguration_day_for_year,
    independence_day,
    juneteenth,
    labor_day,
    memorial_day,
    mlk_day,
    new_years_day,
    thanksgiving_day,
    veterans_day,
    washington_birthday,
    FederalHoliday,
    Holiday,
    STANDARD_HOLIDAYS
};
pub use time::calendar::holidaycalendar::HolidayCalendar;
pub use time::calendar::holidayset::{is_business_day, HolidaySet};
pub use time::dateliteral::parse_date_literal;
pub use time::rangeofdates::RangeOfDates;
