use chrono::{Datelike, NaiveDate, Weekday};

use businessdays::{
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
    FederalHoliday
};

fn date(literal: &str) -> NaiveDate {
    NaiveDate::parse_from_str(literal, "%Y-%m-%d").unwrap()
}

fn holiday_dates(year: i32) -> Vec<String> {
    holidays_for_year(year)
        .unwrap()
        .iter()
        .map(|h| h.date().to_string())
        .collect()
}

#[test]
fn mlk_day_2025() {
    assert_eq!(mlk_day(2025).unwrap(), date("2025-01-20"));
}

#[test]
fn inauguration_day_2025() {
    assert_eq!(inauguration_day_for_year(2025).unwrap(), Some(date("2025-01-20")));
}

#[test]
fn inauguration_day_sunday_shift() {
    assert_eq!(inauguration_day_for_year(2013).unwrap(), Some(date("2013-01-21")));
    assert_eq!(inauguration_day_for_year(1985).unwrap(), Some(date("1985-01-21")));
}

#[test]
fn inauguration_day_absent_in_other_years() {
    for year in [2022, 2023, 2024, 2026, 2027, 2028] {
        assert_eq!(inauguration_day_for_year(year).unwrap(), None, "{year}");
    }
}

#[test]
fn washington_birthday_2025() {
    assert_eq!(washington_birthday(2025).unwrap(), date("2025-02-17"));
}

#[test]
fn memorial_day_2025_and_2026() {
    assert_eq!(memorial_day(2025).unwrap(), date("2025-05-26"));
    assert_eq!(memorial_day(2026).unwrap(), date("2026-05-25"));
}

#[test]
fn juneteenth_sunday_2022() {
    assert_eq!(juneteenth(2022).unwrap(), date("2022-06-20"));
}

#[test]
fn labor_day_2025_and_2026() {
    assert_eq!(labor_day(2025).unwrap(), date("2025-09-01"));
    assert_eq!(labor_day(2026).unwrap(), date("2026-09-07"));
}

#[test]
fn columbus_day_2026() {
    assert_eq!(columbus_day(2026).unwrap(), date("2026-10-12"));
}

#[test]
fn veterans_day_shifts() {
    // Sunday in 2018, Saturday in 2017
    assert_eq!(veterans_day(2018).unwrap(), date("2018-11-12"));
    assert_eq!(veterans_day(2017).unwrap(), date("2017-11-10"));
    assert_eq!(veterans_day(2026).unwrap(), date("2026-11-11"));
}

#[test]
fn independence_day_saturday_2026() {
    assert_eq!(independence_day(2026).unwrap(), date("2026-07-03"));
}

#[test]
fn thanksgiving_day_2022() {
    assert_eq!(thanksgiving_day(2022).unwrap(), date("2022-11-24"));
}

#[test]
fn christmas_day_shifts() {
    assert_eq!(christmas_day(2022).unwrap(), date("2022-12-26"));
    assert_eq!(christmas_day(2021).unwrap(), date("2021-12-24"));
}

#[test]
fn new_years_day_shifts() {
    assert_eq!(new_years_day(2021).unwrap(), date("2021-01-01"));
    assert_eq!(new_years_day(2017).unwrap(), date("2017-01-02"));
    assert_eq!(new_years_day(2028).unwrap(), date("2027-12-31"));
}

#[test]
fn holidays_2025() {
    assert_eq!(holiday_dates(2025), vec![
        "2025-01-01",
        "2025-01-20",
        "2025-02-17",
        "2025-05-26",
        "2025-06-19",
        "2025-07-04",
        "2025-09-01",
        "2025-10-13",
        "2025-11-11",
        "2025-11-27",
        "2025-12-25",
    ]);
}

#[test]
fn holidays_2026() {
    assert_eq!(holiday_dates(2026), vec![
        "2026-01-01",
        "2026-01-19",
        "2026-02-16",
        "2026-05-25",
        "2026-06-19",
        "2026-07-03",
        "2026-09-07",
        "2026-10-12",
        "2026-11-11",
        "2026-11-26",
        "2026-12-25",
    ]);
}

#[test]
fn holidays_2027() {
    assert_eq!(holiday_dates(2027), vec![
        "2027-01-01",
        "2027-01-18",
        "2027-02-15",
        "2027-05-31",
        "2027-06-18",
        "2027-07-05",
        "2027-09-06",
        "2027-10-11",
        "2027-11-11",
        "2027-11-25",
        "2027-12-24",
    ]);
}

#[test]
fn holidays_2021() {
    assert_eq!(holiday_dates(2021), vec![
        "2021-01-01",
        "2021-01-18",
        "2021-02-15",
        "2021-05-31",
        "2021-06-18",
        "2021-07-05",
        "2021-09-06",
        "2021-10-11",
        "2021-11-11",
        "2021-11-25",
        "2021-12-24",
    ]);
}

#[test]
fn holidays_2028_starts_in_previous_december() {
    let holidays = holidays_for_year(2028).unwrap();
    assert_eq!(holidays[0].kind(), FederalHoliday::NewYearsDay);
    assert_eq!(holidays[0].date(), date("2027-12-31"));
    assert_eq!(holidays[0].name(), "New Year's Day");
}

#[test]
fn holidays_are_listed_in_calendar_order() {
    let kinds: Vec<FederalHoliday> = holidays_for_year(2024)
        .unwrap()
        .iter()
        .map(|h| h.kind())
        .collect();
    assert_eq!(kinds, businessdays::STANDARD_HOLIDAYS.to_vec());
    assert!(!kinds.contains(&FederalHoliday::InaugurationDay));
}

#[test]
fn no_standard_holiday_is_observed_on_a_weekend() {
    for year in 1900..=2100 {
        for holiday in holidays_for_year(year).unwrap() {
            assert!(
                !matches!(holiday.date().weekday(), Weekday::Sat | Weekday::Sun),
                "{} {} falls on {}",
                year,
                holiday.name(),
                holiday.date().weekday()
            );
        }
    }
}
