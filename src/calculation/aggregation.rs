//! Per-employee aggregation of punches within a pay period.
//!
//! The store returns a period's punches ordered by employee id, so one pass
//! folding consecutive punches of the same employee yields one earning per
//! employee, already in employee order.

use rust_decimal::Decimal;
use tracing::warn;

use super::pay_period::pay_period_containing;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeEarning, PayPeriod, PunchRecord};
use crate::store::RecordStore;

/// Aggregates every punch dated within `period`.
///
/// Returns one earning stub per employee with at least one punch in the
/// period, ordered by employee id. An employee with no punches gets no stub.
///
/// # Errors
///
/// - `StoreFailure` if the range query fails
/// - `CalculationError` if an employee's total hours overflow
pub async fn aggregate_period(
    store: &dyn RecordStore,
    period: PayPeriod,
) -> PayrollResult<Vec<EmployeeEarning>> {
    let punches = store
        .punches_in_range(period.start_date, period.end_date)
        .await?;
    fold_punches(period, &punches)
}

/// Folds punches, ordered by employee id, into earning stubs.
///
/// `period` must be one of the canonical half-month periods and every punch
/// must fall inside it. The job group of an employee's first punch in the
/// period wins; later punches with a different group are still counted at
/// that group.
pub fn fold_punches(
    period: PayPeriod,
    punches: &[PunchRecord],
) -> PayrollResult<Vec<EmployeeEarning>> {
    let mut earnings: Vec<EmployeeEarning> = Vec::new();

    for punch in punches {
        debug_assert_eq!(
            pay_period_containing(punch.work_date),
            Some(period),
            "punch dated {} outside its pay period",
            punch.work_date
        );
        match earnings.last_mut() {
            Some(current) if current.employee_id == punch.employee_id => {
                if current.job_group != punch.job_group {
                    warn!(
                        employee_id = punch.employee_id,
                        period_start = %period.start_date,
                        kept = %current.job_group,
                        ignored = %punch.job_group,
                        "mixed job groups within pay period"
                    );
                }
                current.hours = add_hours(current.hours, punch.hours, punch.employee_id)?;
            }
            _ => earnings.push(EmployeeEarning::stub(
                punch.employee_id,
                period,
                punch.hours,
                punch.job_group,
            )),
        }
    }

    Ok(earnings)
}

fn add_hours(total: Decimal, hours: Decimal, employee_id: u32) -> PayrollResult<Decimal> {
    total
        .checked_add(hours)
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("total hours overflow for employee {}", employee_id),
        })
}
