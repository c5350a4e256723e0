//! Calendar period handling
//!
//! All calendar arithmetic in the savings core is done on the UTC calendar.
//! A [`CalendarPeriod`] is a half-open interval `[start, end)` of instants,
//! built from a reference instant ("today", "this week", "this month") or
//! from an explicit year and month.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        year: i32,
        month: u32,
    },

    #[error("Date out of supported range")]
    OutOfRange,
}

/// A half-open interval of instants on the UTC calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarPeriod {
    /// Start of the period (inclusive)
    pub start: DateTime<Utc>,
    /// End of the period (exclusive)
    pub end: DateTime<Utc>,
}

impl CalendarPeriod {
    /// Creates a new period, rejecting empty or inverted intervals
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The calendar day containing `instant`
    pub fn day_containing(instant: DateTime<Utc>) -> Self {
        let start = start_of_day(instant.date_naive());
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// The calendar week containing `instant`; weeks start on Monday
    pub fn week_containing(instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        let offset = u64::from(date.weekday().num_days_from_monday());
        let monday = date - Days::new(offset);
        let start = start_of_day(monday);
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    /// The calendar month containing `instant`
    pub fn month_containing(instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        let first = date - Days::new(u64::from(date.day0()));
        Self::month_from_first_day(first)
    }

    /// The calendar month `month` (1-12) of `year`
    pub fn month(year: i32, month: u32) -> Result<Self, TemporalError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(TemporalError::InvalidMonth { year, month })?;
        Ok(Self::month_from_first_day(first))
    }

    /// From the start of the day `days` days before `instant` to the end of
    /// the day containing `instant`
    pub fn trailing_days(instant: DateTime<Utc>, days: u32) -> Self {
        let today = Self::day_containing(instant);
        Self {
            start: today.start - Duration::days(i64::from(days)),
            end: today.end,
        }
    }

    /// Returns true if this period contains the given timestamp
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Returns true if `other` lies entirely within this period
    pub fn encloses(&self, other: &CalendarPeriod) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// The month immediately before the one starting at this period's start
    pub fn previous_month(&self) -> Result<Self, TemporalError> {
        let first = self.start.date_naive();
        let first = first - Days::new(u64::from(first.day0()));
        let previous = first
            .checked_sub_months(Months::new(1))
            .ok_or(TemporalError::OutOfRange)?;
        Ok(Self::month_from_first_day(previous))
    }

    fn month_from_first_day(first: NaiveDate) -> Self {
        let start = start_of_day(first);
        let end = first
            .checked_add_months(Months::new(1))
            .map(start_of_day)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { start, end }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// Abbreviated English month name for a month number (1-12)
pub fn month_abbreviation(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}
