//! Wage calculation.
//!
//! Each job group pays a fixed hourly rate:
//!
//! | Group | Rate per hour |
//! |-------|---------------|
//! | A     | $20.00        |
//! | B     | $30.00        |
//!
//! Amounts are rounded to cents, midpoints away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeEarning, JobGroup, PayrollReport};

/// Hourly rate for job group A.
pub const JOB_GROUP_A_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Hourly rate for job group B.
pub const JOB_GROUP_B_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Hourly rate for `job_group`.
pub fn hourly_rate(job_group: JobGroup) -> Decimal {
    match job_group {
        JobGroup::A => JOB_GROUP_A_RATE,
        JobGroup::B => JOB_GROUP_B_RATE,
    }
}

/// Pay for `hours` worked at `job_group`'s rate, rounded to cents.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_amount;
/// use payroll_engine::models::JobGroup;
/// use rust_decimal::Decimal;
///
/// let amount = calculate_amount(JobGroup::A, Decimal::new(14, 0)).unwrap();
/// assert_eq!(amount, Decimal::new(280, 0));
/// ```
///
/// # Errors
///
/// Returns `CalculationError` if the product overflows.
pub fn calculate_amount(job_group: JobGroup, hours: Decimal) -> PayrollResult<Decimal> {
    hours
        .checked_mul(hourly_rate(job_group))
        .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("amount overflow for {} hours at group {}", hours, job_group),
        })
}

/// Formats an amount as a dollar string with exactly two decimals.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(280, 0)), "$280.00");
/// assert_eq!(format_amount(Decimal::new(1505, 1)), "$150.50");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}

/// Fills in the amount of one earning.
pub fn apply_wage(earning: &mut EmployeeEarning) -> PayrollResult<()> {
    earning.amount = Some(calculate_amount(earning.job_group, earning.hours)?);
    Ok(())
}

/// Fills in the amount of every earning in `report`.
pub fn apply_wages(report: &mut PayrollReport) -> PayrollResult<()> {
    report.earnings.iter_mut().try_for_each(apply_wage)
}
