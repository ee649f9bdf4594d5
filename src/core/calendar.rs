//! Legal-holiday calendar and working-day arithmetic.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::FiscalError;
use super::holidays::ROMANIAN_LEGAL_HOLIDAYS;

/// Romanian month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Ianuarie",
    "Februarie",
    "Martie",
    "Aprilie",
    "Mai",
    "Iunie",
    "Iulie",
    "August",
    "Septembrie",
    "Octombrie",
    "Noiembrie",
    "Decembrie",
];

/// Kind of non-working day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Legal holiday under the labour code.
    #[default]
    Legal,
    /// Company- or locally-declared day off.
    Other,
}

/// A single non-working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub kind: HolidayKind,
}

impl Holiday {
    pub fn legal(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: HolidayKind::Legal,
        }
    }
}

/// A set of holidays indexed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    days: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// An empty calendar: only weekends are non-working.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in Romanian legal holidays.
    pub fn romania() -> Self {
        let days = ROMANIAN_LEGAL_HOLIDAYS
            .iter()
            .filter_map(|&(y, m, d, name)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, Holiday::legal(date, name)))
            })
            .collect();
        Self { days }
    }

    /// Add holidays; an entry on an existing date replaces it.
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        for h in holidays {
            self.days.insert(h.date, h);
        }
        self
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.days.get(&date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Monday to Friday and not a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// All holidays of a month, weekend ones included, in date order.
    pub fn holidays_in(&self, year: i32, month: u32) -> Vec<Holiday> {
        let Some((first, last)) = month_bounds(year, month) else {
            return Vec::new();
        };
        self.days.range(first..=last).map(|(_, h)| h.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Working-day summary for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    /// 1-based month number.
    pub month: u32,
    /// Romanian month name.
    pub name: String,
    pub total_days: u32,
    pub working_days: u32,
    /// Saturdays and Sundays, including holidays that fall on them.
    pub weekend_days: u32,
    /// Holidays falling on a weekday.
    pub holiday_days: u32,
    pub holidays: Vec<Holiday>,
}

/// Working-day summary for a calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub months: Vec<MonthSummary>,
    pub total_working_days: u32,
    pub total_holidays: u32,
    pub total_weekends: u32,
    pub total_days: u32,
}

/// Count working, weekend and holiday days of a month.
pub fn working_days(
    year: i32,
    month: u32,
    calendar: &HolidayCalendar,
) -> Result<MonthSummary, FiscalError> {
    let (first, last) = month_bounds(year, month)
        .ok_or_else(|| FiscalError::InvalidInput(format!("invalid month {year}-{month}")))?;

    let mut working = 0;
    let mut weekend = 0;
    let mut holiday = 0;
    for date in first.iter_days().take_while(|d| *d <= last) {
        if is_weekend(date) {
            weekend += 1;
        } else if calendar.is_holiday(date) {
            holiday += 1;
        } else {
            working += 1;
        }
    }

    Ok(MonthSummary {
        month,
        name: MONTH_NAMES[(month - 1) as usize].to_string(),
        total_days: last.day(),
        working_days: working,
        weekend_days: weekend,
        holiday_days: holiday,
        holidays: calendar.holidays_in(year, month),
    })
}

/// Month-by-month working-day summary for a whole year.
pub fn yearly_working_days(
    year: i32,
    calendar: &HolidayCalendar,
) -> Result<YearSummary, FiscalError> {
    let months = (1..=12)
        .map(|m| working_days(year, m, calendar))
        .collect::<Result<Vec<_>, _>>()?;

    let total_working_days = months.iter().map(|m| m.working_days).sum();
    let total_holidays = months.iter().map(|m| m.holiday_days).sum();
    let total_weekends = months.iter().map(|m| m.weekend_days).sum();
    let total_days = months.iter().map(|m| m.total_days).sum();

    Ok(YearSummary {
        year,
        months,
        total_working_days,
        total_holidays,
        total_weekends,
        total_days,
    })
}

/// The date `days` working days after `start` (weekends and holidays skipped).
/// `start` itself is never counted.
pub fn add_business_days(start: NaiveDate, days: u32, calendar: &HolidayCalendar) -> NaiveDate {
    let mut date = start;
    let mut added = 0;
    while added < days {
        date += Duration::days(1);
        if calendar.is_working_day(date) {
            added += 1;
        }
    }
    date
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}
