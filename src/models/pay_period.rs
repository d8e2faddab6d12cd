//! Pay period and work month models.
//!
//! This module contains the [`PayPeriod`] window used to group punches and the
//! [`WorkMonth`] type naming a calendar month that has recorded work.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, with its first and last day resolved.
///
/// Ordering is chronological.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkMonth;
///
/// let february = WorkMonth::new(2020, 2).unwrap();
/// assert_eq!(february.last_day().to_string(), "2020-02-29");
/// assert!(WorkMonth::new(2020, 13).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkMonth {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl WorkMonth {
    /// Creates the month `year`-`month`, or `None` if it is not a real month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last_day = first_day
            .checked_add_months(Months::new(1))?
            .pred_opt()?;
        Some(Self {
            first_day,
            last_day,
        })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Day 1 of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

/// Which half of its month a pay period covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodHalf {
    /// Days 1 through 15.
    First,
    /// Day 16 through the end of the month.
    Second,
}

/// A half-month pay period.
///
/// Periods are always built by the pay period calculator, so `start_date` is
/// either the 1st or the 16th and `end_date` the 15th or the month's last day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2020, 1, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Which half of the month this period covers.
    pub fn half(&self) -> PeriodHalf {
        if self.start_date.day() == 1 {
            PeriodHalf::First
        } else {
            PeriodHalf::Second
        }
    }
}
