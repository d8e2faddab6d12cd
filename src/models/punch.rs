//! Punch record model and related types.
//!
//! This module defines the [`PunchRecord`] struct, the closed [`JobGroup`]
//! enumeration and the [`BatchId`] newtype identifying an uploaded time report.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RowErrorKind;

/// Identifier of one uploaded time report, taken from its file name.
///
/// Identifiers are compared as text, so `"010"` and `"10"` are distinct batches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

impl BatchId {
    /// Wraps an already-validated identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of the work performed, each mapped to a fixed hourly rate.
///
/// There is no "unknown" member: unrecognised codes are rejected when a row is
/// parsed, so every stored punch carries one of these groups.
///
/// # Example
///
/// ```
/// use payroll_engine::models::JobGroup;
///
/// let group: JobGroup = "A".parse().unwrap();
/// assert_eq!(group, JobGroup::A);
/// assert!("C".parse::<JobGroup>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobGroup {
    /// Job group `A`.
    A,
    /// Job group `B`.
    B,
}

impl JobGroup {
    /// The code used for this group in time reports and in the store.
    pub fn code(&self) -> &'static str {
        match self {
            JobGroup::A => "A",
            JobGroup::B => "B",
        }
    }
}

impl fmt::Display for JobGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for JobGroup {
    type Err = RowErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(JobGroup::A),
            "B" => Ok(JobGroup::B),
            other => Err(RowErrorKind::UnknownJobGroup {
                value: other.to_string(),
            }),
        }
    }
}

/// One line of a time report: hours an employee worked on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The employee's id (always positive).
    pub employee_id: u32,
    /// The calendar date the work was done.
    pub work_date: NaiveDate,
    /// Hours worked, never negative.
    pub hours: Decimal,
    /// The job group the work was done under.
    pub job_group: JobGroup,
}
