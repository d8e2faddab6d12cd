//! Pay period boundary derivation.
//!
//! Every month splits into two canonical pay periods: days 1 to 15 and day 16
//! to the month's last day. This module is pure and never reads the store.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{PayPeriod, WorkMonth};

/// Last day of the first half-month pay period.
pub const FIRST_HALF_LAST_DAY: u32 = 15;

/// Days 1 through 15 of `month`.
pub fn first_half(month: WorkMonth) -> PayPeriod {
    let start_date = month.first_day();
    PayPeriod {
        start_date,
        end_date: start_date + Days::new(u64::from(FIRST_HALF_LAST_DAY - 1)),
    }
}

/// Day 16 through the last calendar day of `month`.
pub fn second_half(month: WorkMonth) -> PayPeriod {
    PayPeriod {
        start_date: month.first_day() + Days::new(u64::from(FIRST_HALF_LAST_DAY)),
        end_date: month.last_day(),
    }
}

/// Both pay periods of `month`, first half then second half.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::pay_periods_for_month;
/// use payroll_engine::models::WorkMonth;
///
/// let [first, second] = pay_periods_for_month(WorkMonth::new(2020, 2).unwrap());
/// assert_eq!(first.start_date.to_string(), "2020-02-01");
/// assert_eq!(first.end_date.to_string(), "2020-02-15");
/// assert_eq!(second.start_date.to_string(), "2020-02-16");
/// assert_eq!(second.end_date.to_string(), "2020-02-29");
/// ```
pub fn pay_periods_for_month(month: WorkMonth) -> [PayPeriod; 2] {
    [first_half(month), second_half(month)]
}

/// The canonical pay period containing `date`.
pub fn pay_period_containing(date: NaiveDate) -> Option<PayPeriod> {
    let month = WorkMonth::containing(date)?;
    if date.day() <= FIRST_HALF_LAST_DAY {
        Some(first_half(month))
    } else {
        Some(second_half(month))
    }
}
