//! Calendar arithmetic: period windows, recurrence-date stepping, and
//! the clock abstraction that keeps time-driven paths deterministic.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::ledger::{BudgetPeriod, Frequency};

/// Clock abstracts access to the current timestamp so time-driven code
/// remains deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.0.and_hms_opt(12, 0, 0).unwrap(), Utc)
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The canonical window for `period` containing `reference`: the single
/// calendar day, the Monday through Sunday week, or the first to last
/// day of the month.
pub fn period_window(period: BudgetPeriod, reference: NaiveDate) -> DateWindow {
    match period {
        BudgetPeriod::Daily => DateWindow::new(reference, reference),
        BudgetPeriod::Weekly => {
            let monday =
                reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
            DateWindow::new(monday, monday + Duration::days(6))
        }
        BudgetPeriod::Monthly => {
            let first = reference.with_day(1).unwrap();
            let last = NaiveDate::from_ymd_opt(
                reference.year(),
                reference.month(),
                days_in_month(reference.year(), reference.month()),
            )
            .unwrap();
            DateWindow::new(first, last)
        }
    }
}

/// Advances `from` by one unit of `frequency`. Month and year steps
/// clamp the day to the target month's length, so Jan 31 + 1 month is
/// Feb 28 (29 in leap years).
pub fn next_occurrence(from: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => from + Duration::days(1),
        Frequency::Weekly => from + Duration::weeks(1),
        Frequency::Monthly => shift_month(from, 1),
        Frequency::Yearly => shift_year(from, 1),
    }
}

/// Renders `date` with a strftime format string, falling back to ISO
/// when the format is malformed. Settings carry user-editable formats,
/// so rendering must not panic.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format_with_items(items.into_iter()).to_string()
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
