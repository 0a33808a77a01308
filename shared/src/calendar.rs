//! Calendar arithmetic for the date picker.
//!
//! Everything here is pure: grids, range checks and navigation guards are
//! recomputed from their inputs on every render and never hold state.

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::error::DateError;

/// Number of cells in a month grid (6 weeks of 7 days)
pub const GRID_CELLS: usize = 42;

/// Weekday column labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A year + month pair, stored as the first day of that month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewMonth(NaiveDate);

impl ViewMonth {
    /// Build a view month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(DateError::InvalidMonth { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self(start_of_month(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        // chrono's final month has no successor and ends on NaiveDate::MAX
        self.next()
            .and_then(|next| next.0.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The preceding month, or `None` at the start of chrono's range
    pub fn previous(&self) -> Option<Self> {
        self.0.checked_sub_months(Months::new(1)).map(Self)
    }

    /// The following month, or `None` at the end of chrono's range
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&get_month_year_string(*self))
    }
}

/// True iff both values fall on the same calendar day. Time-of-day is ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

pub fn is_same_month<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Midnight at the start of `date`
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // wraps backwards past midnight
    date.and_time(NaiveTime::MIN - Duration::milliseconds(1))
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Inclusive range check: `min` counts from its 00:00:00.000 and `max` up to
/// its 23:59:59.999. A missing bound leaves that side open.
///
/// Bounds are taken by value; normalization produces new values.
pub fn is_date_in_range(
    date: NaiveDateTime,
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
) -> bool {
    let after_min = min.map_or(true, |min| date >= start_of_day(min.date()));
    let before_max = max.map_or(true, |max| date <= end_of_day(max.date()));
    after_min && before_max
}

/// Day-granular form of [`is_date_in_range`]
pub fn is_day_in_range(day: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    is_date_in_range(
        start_of_day(day),
        min.map(start_of_day),
        max.map(start_of_day),
    )
}

/// The 42 consecutive dates shown for `month`, starting on the Sunday on or
/// before the 1st.
pub fn get_days_in_month(month: ViewMonth) -> Vec<NaiveDate> {
    let first = month.first_day();
    let mut days = Vec::with_capacity(GRID_CELLS);

    // Tail of the preceding month
    let lead = u64::from(first.weekday().num_days_from_sunday());
    days.extend(
        (1..=lead)
            .rev()
            .filter_map(|offset| first.checked_sub_days(Days::new(offset))),
    );

    days.extend(first.iter_days().take_while(|day| month.contains(*day)));

    // Close out the final week
    let last = month.last_day();
    let trail = 6 - last.weekday().num_days_from_sunday() as usize;
    days.extend(last.iter_days().skip(1).take(trail));

    // Short months need a whole extra week to reach six rows
    while days.len() < GRID_CELLS {
        match days.last().and_then(|day| day.succ_opt()) {
            Some(next) => days.push(next),
            None => break,
        }
    }

    days
}

/// Display form, e.g. "Mar 5, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Header label, e.g. "March 2024"
pub fn get_month_year_string(month: ViewMonth) -> String {
    month.first_day().format("%B %Y").to_string()
}

/// Parse a `YYYY-MM-DD` string
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::InvalidDate(input.to_string()))
}

/// Optional inclusive bounds on selectable days.
///
/// Construction rejects `min > max`, so every value in circulation is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRange {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl SelectionRange {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self, DateError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(DateError::InvertedRange { min, max });
            }
        }
        Ok(Self { min, max })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        is_day_in_range(day, self.min, self.max)
    }

    /// Which month arrows are usable while `view` is displayed.
    ///
    /// Comparison is at month granularity: the neighbouring month is reachable
    /// as long as its first day is not before `min`'s month, or after `max`'s.
    pub fn navigation(&self, view: ViewMonth) -> NavigationFlags {
        let is_prev_disabled = match view.previous() {
            Some(prev) => self.min.is_some_and(|min| prev < ViewMonth::containing(min)),
            None => true,
        };
        let is_next_disabled = match view.next() {
            Some(next) => self.max.is_some_and(|max| next > ViewMonth::containing(max)),
            None => true,
        };

        NavigationFlags {
            is_prev_disabled,
            is_next_disabled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationFlags {
    pub is_prev_disabled: bool,
    pub is_next_disabled: bool,
}

/// Render model for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_in_range: bool,
    pub is_disabled: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The date to report when this cell is activated; `None` for inert cells
    pub fn selectable_date(&self) -> Option<NaiveDate> {
        (!self.is_disabled).then_some(self.date)
    }
}

/// Flag every date of the grid for `month`
pub fn build_day_cells(
    month: ViewMonth,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    range: &SelectionRange,
) -> Vec<DayCell> {
    get_days_in_month(month)
        .into_iter()
        .map(|date| {
            let is_current_month = month.contains(date);
            let is_in_range = range.contains(date);
            DayCell {
                date,
                is_current_month,
                is_today: is_same_day(&date, &today),
                is_selected: selected.is_some_and(|selected| is_same_day(&date, &selected)),
                is_in_range,
                is_disabled: !is_current_month || !is_in_range,
            }
        })
        .collect()
}
