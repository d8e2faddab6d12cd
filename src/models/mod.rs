//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod earning;
mod pay_period;
mod punch;

pub use earning::{EmployeeEarning, PayrollReport};
pub use pay_period::{PayPeriod, PeriodHalf, WorkMonth};
pub use punch::{BatchId, JobGroup, PunchRecord};
