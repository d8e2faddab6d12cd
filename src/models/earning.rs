//! Earning and report models.
//!
//! An [`EmployeeEarning`] is one employee's totals for one pay period. The
//! aggregator produces them with `amount` unset; the wage engine fills it in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{JobGroup, PayPeriod};

/// One employee's aggregated work and pay for one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeEarning, JobGroup, PayPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let stub = EmployeeEarning::stub(
///     1,
///     PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
///     },
///     Decimal::new(14, 0),
///     JobGroup::A,
/// );
/// assert!(stub.amount.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEarning {
    /// The employee's id.
    pub employee_id: u32,
    /// The pay period these totals cover.
    pub pay_period: PayPeriod,
    /// Total hours worked in the period.
    pub hours: Decimal,
    /// The job group the hours are paid at.
    pub job_group: JobGroup,
    /// The amount paid, once the wage engine has run.
    pub amount: Option<Decimal>,
}

impl EmployeeEarning {
    /// Creates an earning with no amount computed yet.
    pub fn stub(employee_id: u32, pay_period: PayPeriod, hours: Decimal, job_group: JobGroup) -> Self {
        Self {
            employee_id,
            pay_period,
            hours,
            job_group,
            amount: None,
        }
    }
}

/// The payroll report: earnings ordered by month, then half, then employee id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The ordered earnings.
    pub earnings: Vec<EmployeeEarning>,
}

impl PayrollReport {
    /// Number of earnings in the report.
    pub fn len(&self) -> usize {
        self.earnings.len()
    }

    /// Returns true if no punches were found at all.
    pub fn is_empty(&self) -> bool {
        self.earnings.is_empty()
    }
}
