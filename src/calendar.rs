use crate::models::{CalendarView, DayCell, LIMITS};
use crate::stats::compute_remaining;
use crate::store::LogStore;
use chrono::{Datelike, Month, NaiveDate};
use std::fmt;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar month whose date keys always format as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// Parses `YYYY-MM`.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        let digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Moves by `delta` months, rolling the year over in both directions.
    pub fn advance(self, delta: i32) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        Self::new(year, month)
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub fn first_weekday(self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn contains_day(self, day: u32) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    pub fn key_prefix(self) -> String {
        format!("{:04}-{:02}-", self.year, self.month)
    }

    pub fn date_key(self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    pub fn month_name(self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .map(|month| month.name())
            .unwrap_or("")
    }

    pub fn title(self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn render(month: YearMonth, store: &LogStore) -> CalendarView {
    let days = (1..=month.days_in_month())
        .map(|day| {
            let date_key = month.date_key(day);
            let entry = store.get(&date_key);
            DayCell {
                day,
                label: entry.map(|entry| entry.summary_label()),
                activity_type: entry.map(|entry| entry.activity_type),
                date_key,
            }
        })
        .collect();

    CalendarView {
        year: month.year(),
        month: month.month(),
        title: month.title(),
        leading_blanks: month.first_weekday(),
        days,
        remaining: compute_remaining(month, store),
        limits: LIMITS,
    }
}
