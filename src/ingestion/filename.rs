//! Batch identifier extraction from time report file names.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PayrollError, PayrollResult};
use crate::models::BatchId;

static TIME_REPORT_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^time-report-(\d+)\.csv$").expect("time report filename pattern is valid")
});

/// Extracts the batch identifier from a file named `time-report-<digits>.csv`.
///
/// # Example
///
/// ```
/// use payroll_engine::ingestion::parse_batch_id;
///
/// assert_eq!(parse_batch_id("time-report-10.csv").unwrap().as_str(), "10");
/// assert!(parse_batch_id("foo.csv").is_err());
/// ```
pub fn parse_batch_id(filename: &str) -> PayrollResult<BatchId> {
    TIME_REPORT_FILENAME
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|id| BatchId::new(id.as_str()))
        .ok_or_else(|| PayrollError::InvalidFilename {
            filename: filename.to_string(),
        })
}
