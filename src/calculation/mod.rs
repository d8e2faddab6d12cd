//! Payroll calculation.
//!
//! This module contains the read-path pipeline: deriving half-month pay
//! periods, aggregating punches per employee within each period, pricing
//! the aggregated hours by job group and assembling the ordered report.

mod aggregation;
mod pay_period;
mod report;
mod wages;

pub use aggregation::{aggregate_period, fold_punches};
pub use pay_period::{
    FIRST_HALF_LAST_DAY, first_half, pay_period_containing, pay_periods_for_month, second_half,
};
pub use report::build_payroll_report;
pub use wages::{
    JOB_GROUP_A_RATE, JOB_GROUP_B_RATE, apply_wage, apply_wages, calculate_amount,
    format_amount, hourly_rate,
};
