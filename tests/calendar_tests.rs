use chrono::{Datelike, NaiveDate};
use impozit::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn january_2026() {
    let cal = HolidayCalendar::romania();
    let m = working_days(2026, 1, &cal).unwrap();
    assert_eq!(m.name, "Ianuarie");
    assert_eq!(m.total_days, 31);
    assert_eq!(m.working_days, 18);
    assert_eq!(m.weekend_days, 9);
    assert_eq!(m.holiday_days, 4);
    // Jan 24 falls on a Saturday but is still listed.
    assert_eq!(m.holidays.len(), 5);
    assert_eq!(m.holidays[4].date, date(2026, 1, 24));
}

#[test]
fn year_2026_by_month() {
    let cal = HolidayCalendar::romania();
    let y = yearly_working_days(2026, &cal).unwrap();
    let per_month: Vec<u32> = y.months.iter().map(|m| m.working_days).collect();
    assert_eq!(per_month, [18, 20, 22, 20, 20, 21, 23, 21, 22, 22, 20, 21]);
    assert_eq!(y.total_working_days, 250);
    assert_eq!(y.total_weekends, 104);
    assert_eq!(y.total_holidays, 11);
    assert_eq!(y.total_days, 365);
}

#[test]
fn neighbouring_years() {
    let cal = HolidayCalendar::romania();
    assert_eq!(yearly_working_days(2025, &cal).unwrap().total_working_days, 248);
    assert_eq!(yearly_working_days(2027, &cal).unwrap().total_working_days, 252);
}

#[test]
fn leap_year_has_366_days() {
    let y = yearly_working_days(2028, &HolidayCalendar::empty()).unwrap();
    assert_eq!(y.total_days, 366);
    assert_eq!(y.months[1].total_days, 29);
}

#[test]
fn empty_calendar_counts_weekends_only() {
    let m = working_days(2026, 1, &HolidayCalendar::empty()).unwrap();
    assert_eq!(m.working_days, 22);
    assert_eq!(m.holiday_days, 0);
    assert!(m.holidays.is_empty());
}

#[test]
fn invalid_month_rejected() {
    let cal = HolidayCalendar::romania();
    assert!(matches!(
        working_days(2026, 13, &cal),
        Err(FiscalError::InvalidInput(_))
    ));
    assert!(working_days(2026, 0, &cal).is_err());
}

#[test]
fn business_days_skip_easter() {
    let cal = HolidayCalendar::romania();
    assert_eq!(add_business_days(date(2026, 4, 9), 2, &cal), date(2026, 4, 15));
    assert_eq!(add_business_days(date(2026, 4, 9), 0, &cal), date(2026, 4, 9));
    // Friday + 1 lands on Monday.
    assert_eq!(add_business_days(date(2026, 3, 6), 1, &cal), date(2026, 3, 9));
}

#[test]
fn extra_holidays_replace_existing_dates() {
    let cal = HolidayCalendar::romania().with_holidays([Holiday::legal(
        date(2026, 12, 1),
        "Ziua Națională a României",
    )]);
    assert_eq!(cal.get(date(2026, 12, 1)).unwrap().name, "Ziua Națională a României");
    assert_eq!(cal.len(), HolidayCalendar::romania().len());
}

#[test]
fn weekend_detection() {
    assert!(is_weekend(date(2026, 1, 24)));
    assert!(!is_weekend(date(2026, 1, 26)));
    assert_eq!(date(2026, 1, 24).weekday(), chrono::Weekday::Sat);
}

#[test]
fn month_names_are_romanian() {
    assert_eq!(MONTH_NAMES[0], "Ianuarie");
    assert_eq!(MONTH_NAMES[11], "Decembrie");
}
